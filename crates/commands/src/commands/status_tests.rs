//! Unit tests for the status command

use std::path::PathBuf;
use std::sync::Arc;

use crate::commands::status::*;
use crate::profile::{ConfigBlock, GatewayMode, SecretSource};
use crate::test_helpers::*;
use claude_gateway_runtime::deps::*;

struct TestFixture {
    file_system: MockFileSystemMock,
    environment: MockEnvironmentMock,
    ui: Arc<TestUserInterface>,
}

impl TestFixture {
    fn new() -> Self {
        let mut environment = MockEnvironmentMock::new();
        environment
            .expect_home_dir()
            .returning(|| Some(PathBuf::from("/home/dev")));
        environment
            .expect_shell()
            .returning(|| Some("/bin/zsh".to_string()));

        Self {
            file_system: MockFileSystemMock::new(),
            environment,
            ui: Arc::new(TestUserInterface::new()),
        }
    }

    #[allow(clippy::wrong_self_convention)]
    fn to_deps(self) -> Arc<StatusDependencies> {
        Arc::new(StatusDependencies {
            ui: self.ui as Arc<dyn UserInterface>,
            file_system: Arc::new(self.file_system) as Arc<dyn FileSystem>,
            environment: Arc::new(self.environment) as Arc<dyn Environment>,
        })
    }
}

#[test]
fn test_status_reports_unconfigured_profile() {
    let mut fixture = TestFixture::new();
    fixture.file_system.expect_exists().returning(|_| false);

    let ui = fixture.ui.clone();
    let deps = fixture.to_deps();
    execute_with_deps(&StatusArgs { json: false }, &deps).unwrap();

    let output = ui.get_output();
    assert!(output.iter().any(|line| line == "Profile: /home/dev/.zshrc"));
    assert!(output.iter().any(|line| line == "Gateway: not configured"));
}

#[test]
fn test_status_reports_configured_mode() {
    let mut fixture = TestFixture::new();
    let block = ConfigBlock::generate(GatewayMode::ApiKey, SecretSource::Placeholder);
    let content = block.render();

    fixture.file_system.expect_exists().returning(|_| true);
    fixture
        .file_system
        .expect_read_to_string()
        .returning(move |_| Ok(content.clone()));

    let ui = fixture.ui.clone();
    let deps = fixture.to_deps();
    execute_with_deps(&StatusArgs { json: false }, &deps).unwrap();

    assert!(
        ui.get_output()
            .iter()
            .any(|line| line == "Gateway: configured (apikey mode)")
    );
}

#[test]
fn test_status_json_output_is_machine_readable() {
    let mut fixture = TestFixture::new();
    let block = ConfigBlock::generate(GatewayMode::Max, SecretSource::Keychain);
    let content = block.render();

    fixture.file_system.expect_exists().returning(|_| true);
    fixture
        .file_system
        .expect_read_to_string()
        .returning(move |_| Ok(content.clone()));

    let ui = fixture.ui.clone();
    let deps = fixture.to_deps();
    execute_with_deps(&StatusArgs { json: true }, &deps).unwrap();

    let output = ui.get_output();
    let report: serde_json::Value = serde_json::from_str(output.last().unwrap()).unwrap();
    assert_eq!(report["profile"], "/home/dev/.zshrc");
    assert_eq!(report["configured"], true);
    assert_eq!(report["mode"], "max");
}
