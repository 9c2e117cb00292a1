//! Integration tests for the installer framework public API.

use eddy::installers::{
    lookup, Ecosystem, EcosystemInstaller, InstallContext, PackageManager, Procedure, RunReport,
    Tool,
};
use eddy::paths::EddyHome;
use eddy::shell::{Arch, Os, Platform, RecordingShell};
use eddy::version::FixedResolver;
use tempfile::TempDir;

fn mac() -> RecordingShell {
    RecordingShell::new().with_platform(Platform::new(Os::MacOs, Arch::Aarch64))
}

#[test]
fn tool_lookup_spans_configurable_ecosystems() {
    assert_eq!(lookup("nvm"), Some(Procedure::Nvm));
    assert_eq!(lookup("Emscripten"), Some(Procedure::Emscripten));
    assert_eq!(lookup("git"), None);
    assert_eq!(lookup("conan"), None);
}

#[test]
fn native_mode_uses_brew_for_every_cpp_tool() {
    let temp = TempDir::new().unwrap();
    let home = EddyHome::at(temp.path());
    let shell = mac();
    let resolver = FixedResolver::new("1.0.0");
    let ctx = InstallContext::new(&shell, &resolver, &home);

    let mut cpp = EcosystemInstaller::new(Ecosystem::Cpp, PackageManager::Native);
    for name in ["cmake", "ninja", "bazel", "emscripten"] {
        cpp.set_tool(name, Tool::new(name, "latest"));
    }
    let report = cpp.install(&ctx);

    assert!(report.is_empty());
    assert_eq!(
        shell.commands(),
        vec![
            "brew install cmake",
            "brew install ninja",
            "brew install bazel",
            "brew install emscripten",
        ]
    );
    assert!(resolver.lookups().is_empty());
}

#[test]
fn partial_failures_are_aggregated_per_ecosystem() {
    let temp = TempDir::new().unwrap();
    let home = EddyHome::at(temp.path());
    let shell = mac().fail_on("brew install ninja");
    let resolver = FixedResolver::new("1.0.0");
    let ctx = InstallContext::new(&shell, &resolver, &home);

    let mut cpp = EcosystemInstaller::new(Ecosystem::Cpp, PackageManager::Native);
    cpp.set_tool("ninja", Tool::new("ninja", "latest"));
    cpp.set_tool("cmake", Tool::new("cmake", "latest"));
    let mut js = EcosystemInstaller::new(Ecosystem::Javascript, PackageManager::Manual);
    js.set_tool("nvm", Tool::new("nvm", "0.40.1"));

    let mut report = RunReport::new();
    report.merge(Ecosystem::Cpp.key(), cpp.install(&ctx));
    report.merge(Ecosystem::Javascript.key(), js.install(&ctx));

    assert_eq!(report.failure_count(), 1);
    let failures: Vec<(&str, &str)> = report.failures().map(|(e, t, _)| (e, t)).collect();
    assert_eq!(failures, vec![("cpp", "ninja")]);
    assert_eq!(shell.commands_matching("brew install cmake").len(), 1);
    assert_eq!(
        shell.commands_matching("nvm-sh/nvm/v0.40.1/install.sh").len(),
        1
    );
}
