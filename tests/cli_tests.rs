use std::process::Command;

#[test]
fn top_level_help_succeeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_tubetalk"))
        .arg("--help")
        .output()
        .expect("failed to execute tubetalk");

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["info", "summarize", "ask", "config", "completions"] {
        assert!(
            stdout.contains(subcommand),
            "help should list the {} subcommand:\n{}",
            subcommand,
            stdout
        );
    }
}

#[test]
fn subcommand_help_succeeds() {
    for subcommand in ["info", "summarize", "ask"] {
        let output = Command::new(env!("CARGO_BIN_EXE_tubetalk"))
            .args([subcommand, "--help"])
            .output()
            .expect("failed to execute tubetalk");

        assert!(
            output.status.success(),
            "{} --help should succeed\nstderr:\n{}",
            subcommand,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn info_rejects_unrecognizable_urls() {
    let output = Command::new(env!("CARGO_BIN_EXE_tubetalk"))
        .args(["info", "https://vimeo.com/123456789"])
        .output()
        .expect("failed to execute tubetalk");

    assert!(
        !output.status.success(),
        "info should fail for a non-YouTube URL\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Not a recognizable YouTube URL"),
        "expected URL error, got:\n{}",
        stderr
    );
}

#[test]
fn ask_rejects_empty_questions() {
    let output = Command::new(env!("CARGO_BIN_EXE_tubetalk"))
        .args(["ask", "https://youtu.be/dQw4w9WgXcQ", "   "])
        .output()
        .expect("failed to execute tubetalk");

    assert!(
        !output.status.success(),
        "ask should fail for an empty question\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Question cannot be empty"),
        "expected empty question error, got:\n{}",
        stderr
    );
}
