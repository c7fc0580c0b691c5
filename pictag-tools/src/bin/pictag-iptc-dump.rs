use pictag_iptc::Iptc;
use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args().nth(1).unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let data = std::fs::read(path).unwrap();
    let iptc = Iptc::new(data).unwrap();

    if iptc.declares_utf8() {
        println!("Coded character set: UTF-8");
    }

    for record in iptc.records() {
        let code = record.code();
        let name = code
            .application_dataset()
            .and_then(|x| x.name())
            .unwrap_or("–");

        let value = match std::str::from_utf8(&record.value) {
            Ok(s) if !s.contains(char::is_control) => format!("{s:?}"),
            _ => format!("0x{}", hex::encode(&record.value)),
        };

        println!("{code}\t{name}\t{value}");
    }
}
