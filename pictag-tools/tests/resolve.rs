use std::process::Command;

fn tags_file(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("pictag-resolve-{}-{name}.tags", std::process::id()));
    std::fs::write(&path, "FILE.MimeType=image/jpeg\nIFD0.Artist=Jane Doe\n").unwrap();
    path
}

#[test]
fn resolve_tag_file() {
    let tags = tags_file("ok");

    let output = Command::new(env!("CARGO_BIN_EXE_pictag-resolve"))
        .arg(&tags)
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(output.status.success());
    assert!(stdout.contains("mime:\timage/jpeg"), "{stdout}");
    assert!(stdout.contains("author:\tJane Doe"), "{stdout}");
    assert!(stdout.contains("orientation:\t1"), "{stdout}");

    std::fs::remove_file(tags).unwrap();
}

#[test]
fn missing_iptc_blob() {
    let tags = tags_file("missing-blob");
    let blob = std::env::temp_dir().join("pictag-resolve-does-not-exist.iptc");

    let output = Command::new(env!("CARGO_BIN_EXE_pictag-resolve"))
        .arg(&tags)
        .arg(&blob)
        .output()
        .unwrap();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Can't read IPTC blob"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");

    std::fs::remove_file(tags).unwrap();
}
