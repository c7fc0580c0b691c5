use std::collections::BTreeMap;
use std::io::Write;

use pictag::Writer;
use pictag_iptc::Profile;
use tracing_subscriber::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let Some(profile) = args.next() else {
        eprintln!("Usage: pictag-iptc-make <legacy|extended> field=value… > blob");
        std::process::exit(2);
    };
    let profile: Profile = profile.parse().unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(2);
    });

    let mut values = BTreeMap::new();
    for arg in args {
        let Some((field, value)) = arg.split_once('=') else {
            eprintln!("Expected field=value, got '{arg}'");
            std::process::exit(2);
        };
        values.insert(field.to_string(), value.to_string());
    }

    let blob = Writer::new(profile).encode_str(values).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    });

    std::io::stdout().write_all(&blob).unwrap();
}
