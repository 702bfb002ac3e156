use std::io::Cursor;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use kido_debug::{
    config::DebugSettings,
    host::{
        dispatch, DispatchOutcome, HostPlatform, InstalledExtensions, JsonLineSink,
        WorkspaceContext,
    },
    resolver::{resolve, ResolveContext, CODELLDB_EXTENSION_ID},
};

use crate::common::fixture;

async fn resolve_and_dispatch(
    target_name: Option<&str>,
    target_program: Option<&Path>,
    platform: HostPlatform,
    extensions: InstalledExtensions,
    settings: DebugSettings,
) -> (DispatchOutcome, Vec<u8>) {
    let context = ResolveContext {
        platform: &platform,
        extensions: &extensions,
        settings: &settings,
    };
    let resolution = resolve(target_name, target_program, &context);

    let mut sink = JsonLineSink::new(Cursor::new(Vec::new()));
    let workspace = WorkspaceContext::new(PathBuf::from("/work"));
    let outcome = dispatch(&mut sink, &workspace, resolution)
        .await
        .expect("dispatch succeeds");
    (outcome, sink.into_inner().into_inner())
}

fn envelope(output: &[u8]) -> Value {
    let text = String::from_utf8(output.to_vec()).expect("output is UTF-8");
    assert_eq!(text.lines().count(), 1, "expected one request line");
    serde_json::from_str(text.trim()).expect("output is JSON")
}

#[tokio::test]
async fn linux_defaults_dispatch_a_gdb_configuration() {
    let (outcome, output) = resolve_and_dispatch(
        None,
        Some(Path::new("/bin/app")),
        HostPlatform::Linux,
        InstalledExtensions::default(),
        DebugSettings::default(),
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::Dispatched);
    let envelope = envelope(&output);
    assert_eq!(envelope["request"], json!("startDebugging"));
    assert_eq!(envelope["workspace"], json!("/work"));

    let configuration = &envelope["configuration"];
    assert_eq!(configuration["name"], json!("launch: app"));
    assert_eq!(configuration["type"], json!("cppdbg"));
    assert_eq!(configuration["MIMode"], json!("gdb"));
    assert_eq!(configuration["args"], json!([]));
    assert_eq!(configuration["cwd"], json!("/bin"));
    assert_eq!(configuration["stopAtEntry"], json!(true));
    assert_eq!(configuration["externalConsole"], json!(true));
}

#[tokio::test]
async fn macos_with_extension_dispatches_codelldb_with_table_arguments() {
    let settings = DebugSettings::load_from_path(fixture("tests/fixtures/config_targets.toml").into())
        .expect("fixture loads");

    let (outcome, output) = resolve_and_dispatch(
        Some("server"),
        Some(Path::new("/srv/bin/server")),
        HostPlatform::MacOs,
        InstalledExtensions::new(vec![CODELLDB_EXTENSION_ID.to_string()]),
        settings,
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::Dispatched);
    let configuration = &envelope(&output)["configuration"];
    assert_eq!(configuration["type"], json!("lldb"));
    assert_eq!(configuration["args"], json!(["--port", "8080"]));
    assert_eq!(configuration["externalConsole"], json!(false));
    assert_eq!(configuration["cwd"], json!("/srv/bin"));
}

#[tokio::test]
async fn unknown_target_falls_back_to_default_arguments() {
    let settings = DebugSettings::load_from_path(fixture("tests/fixtures/config_targets.toml").into())
        .expect("fixture loads");

    let (_, output) = resolve_and_dispatch(
        Some("worker"),
        Some(Path::new("/srv/bin/worker")),
        HostPlatform::Linux,
        InstalledExtensions::default(),
        settings,
    )
    .await;

    let configuration = &envelope(&output)["configuration"];
    assert_eq!(configuration["args"], json!(["--verbose"]));
}

#[tokio::test]
async fn overrides_replace_derived_fields_verbatim() {
    let settings =
        DebugSettings::load_from_path(fixture("tests/fixtures/config_overrides.toml").into())
            .expect("fixture loads");

    let (_, output) = resolve_and_dispatch(
        None,
        Some(Path::new("/bin/app")),
        HostPlatform::Linux,
        InstalledExtensions::default(),
        settings,
    )
    .await;

    let configuration = &envelope(&output)["configuration"];
    assert_eq!(configuration["cwd"], json!("/custom"));
    assert_eq!(configuration["externalConsole"], json!(true));
}

#[tokio::test]
async fn missing_program_dispatches_nothing() {
    let (outcome, output) = resolve_and_dispatch(
        Some("app"),
        None,
        HostPlatform::Linux,
        InstalledExtensions::default(),
        DebugSettings::default(),
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::SkippedMissingProgram);
    assert!(output.is_empty());
}

#[tokio::test]
async fn unrecognized_platform_dispatches_nothing() {
    let (outcome, output) = resolve_and_dispatch(
        None,
        Some(Path::new("/bin/app")),
        HostPlatform::Other("freebsd".to_string()),
        InstalledExtensions::default(),
        DebugSettings::default(),
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::SkippedUnsupportedPlatform);
    assert!(output.is_empty());
}
