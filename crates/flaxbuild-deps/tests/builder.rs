//! Dependency builder selection and platform filtering.

mod common;

use std::cell::RefCell;
use std::fs;

use flaxbuild_deps::{
    BuildContext, BuildOptions, Dependency, DependencyRegistry, DepsBuilder, DepsError,
    DepsRequest, ToolsConfig,
};
use flaxbuild_targets::TargetPlatform;
use flaxbuild_workspace::WorkspaceState;

use common::FakeToolchain;

/// Records the options of every build call.
struct Probe {
    name: &'static str,
    supported: &'static [TargetPlatform],
    calls: RefCell<Vec<BuildOptions>>,
    fail: bool,
}

impl Probe {
    fn new(name: &'static str, supported: &'static [TargetPlatform]) -> Self {
        Self {
            name,
            supported,
            calls: RefCell::new(Vec::new()),
            fail: false,
        }
    }
}

impl Dependency for &Probe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "test probe"
    }

    fn platforms(&self, _host: TargetPlatform) -> &'static [TargetPlatform] {
        self.supported
    }

    fn build(&self, _ctx: &BuildContext<'_>, options: &BuildOptions) -> flaxbuild_deps::Result<()> {
        self.calls.borrow_mut().push(options.clone());
        if self.fail {
            return Err(DepsError::MissingSource {
                path: options.intermediate_folder.join("out"),
            });
        }
        Ok(())
    }
}

fn leak(probe: Probe) -> &'static Probe {
    Box::leak(Box::new(probe))
}

#[test]
fn options_carry_only_supported_platforms() {
    let dir = tempfile::tempdir().unwrap();
    let state = WorkspaceState::new(dir.path().join("game"), dir.path().join("engine"))
        .with_host(Some(TargetPlatform::Windows));
    let tools = ToolsConfig::default();
    let runner = FakeToolchain::new();
    let ctx = BuildContext::new(&state, &tools, &runner);

    let probe = leak(Probe::new(
        "physx",
        &[TargetPlatform::Windows, TargetPlatform::UWP, TargetPlatform::Android],
    ));
    let mut registry = DependencyRegistry::new();
    registry.register(Box::new(probe)).unwrap();

    let request = DepsRequest {
        platforms: vec![TargetPlatform::Android, TargetPlatform::Linux, TargetPlatform::Windows],
        only: Vec::new(),
    };
    let summary = DepsBuilder::new(&registry).run(&ctx, &request).unwrap();
    assert_eq!(summary.built, ["physx"]);

    let calls = probe.calls.borrow();
    assert_eq!(calls.len(), 1);
    let options = &calls[0];
    assert_eq!(options.platforms, [TargetPlatform::Android, TargetPlatform::Windows]);
    assert_eq!(options.intermediate_folder, state.deps_intermediate_folder().join("physx"));
    assert_eq!(options.third_party_folder, state.third_party_folder());
    assert_eq!(options.platforms_folder, state.platforms_folder());
    assert!(options.intermediate_folder.is_dir());
}

#[test]
fn default_request_targets_the_host() {
    let dir = tempfile::tempdir().unwrap();
    let state = WorkspaceState::new(dir.path(), dir.path()).with_host(Some(TargetPlatform::Linux));
    let tools = ToolsConfig::default();
    let runner = FakeToolchain::new();
    let ctx = BuildContext::new(&state, &tools, &runner);

    let linux = leak(Probe::new("openal", &[TargetPlatform::Linux, TargetPlatform::Windows]));
    let windows_only = leak(Probe::new("nvapi", &[TargetPlatform::Windows]));
    let mut registry = DependencyRegistry::new();
    registry.register(Box::new(linux)).unwrap();
    registry.register(Box::new(windows_only)).unwrap();

    let summary = DepsBuilder::new(&registry)
        .run(&ctx, &DepsRequest::default())
        .unwrap();
    assert_eq!(summary.built, ["openal"]);
    assert_eq!(summary.skipped, ["nvapi"]);
    assert_eq!(linux.calls.borrow()[0].platforms, [TargetPlatform::Linux]);
    assert!(windows_only.calls.borrow().is_empty());
}

#[test]
fn first_failure_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let state = WorkspaceState::new(dir.path(), dir.path()).with_host(Some(TargetPlatform::Windows));
    let tools = ToolsConfig::default();
    let runner = FakeToolchain::new();
    let ctx = BuildContext::new(&state, &tools, &runner);

    let mut failing = Probe::new("curl", &[TargetPlatform::Windows]);
    failing.fail = true;
    let failing = leak(failing);
    let after = leak(Probe::new("freetype", &[TargetPlatform::Windows]));
    let mut registry = DependencyRegistry::new();
    registry.register(Box::new(failing)).unwrap();
    registry.register(Box::new(after)).unwrap();

    let err = DepsBuilder::new(&registry)
        .run(&ctx, &DepsRequest::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "failed to build dependency 'curl'");
    assert!(after.calls.borrow().is_empty());
}

#[test]
fn only_filter_follows_request_order_and_dedupes() {
    let dir = tempfile::tempdir().unwrap();
    let state = WorkspaceState::new(dir.path(), dir.path()).with_host(Some(TargetPlatform::Windows));
    let tools = ToolsConfig::default();
    let runner = FakeToolchain::new();
    let ctx = BuildContext::new(&state, &tools, &runner);

    let a = leak(Probe::new("assimp", &[TargetPlatform::Windows]));
    let b = leak(Probe::new("mono", &[TargetPlatform::Windows]));
    let mut registry = DependencyRegistry::new();
    registry.register(Box::new(a)).unwrap();
    registry.register(Box::new(b)).unwrap();

    let request = DepsRequest {
        platforms: vec![TargetPlatform::Windows],
        only: vec!["MONO".into(), "assimp".into(), "mono".into()],
    };
    let summary = DepsBuilder::new(&registry).run(&ctx, &request).unwrap();
    assert_eq!(summary.built, ["mono", "assimp"]);
    assert_eq!(b.calls.borrow().len(), 1);
    assert!(fs::read_dir(state.deps_intermediate_folder()).unwrap().count() == 2);
}
