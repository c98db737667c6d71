use std::process::Command;

/// Output of a git command, or the named env var when git is unavailable
/// (e.g. sandboxed package builds without a `.git` directory).
fn git_or_env(args: &[&str], env_var: &str) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .or_else(|| std::env::var(env_var).ok())
        .unwrap_or_default()
}

fn main() {
    println!("cargo::rerun-if-changed=.git/HEAD");
    println!("cargo::rerun-if-changed=.git/refs/heads");
    println!("cargo::rerun-if-env-changed=SHOWCASE_VCS_REVISION");
    println!("cargo::rerun-if-env-changed=SHOWCASE_VCS_BRANCH");

    let revision = git_or_env(&["rev-parse", "HEAD"], "SHOWCASE_VCS_REVISION");
    let branch = git_or_env(&["rev-parse", "--abbrev-ref", "HEAD"], "SHOWCASE_VCS_BRANCH");

    println!("cargo::rustc-env=VCS_REF_HEAD_REVISION={revision}");
    println!("cargo::rustc-env=VCS_REF_HEAD_NAME={branch}");
}
