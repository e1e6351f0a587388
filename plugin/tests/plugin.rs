//! Tests for the plugin's public API against a mock Tauri runtime.

use serde_json::{Value, json};
use tauri::ipc::{CallbackFn, InvokeBody};
use tauri::test::{INVOKE_KEY, MockRuntime};
use tauri::utils::acl::ExecutionContext;
use tauri::webview::InvokeRequest;
use tauri::{App, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_wallpaper::{
    BackendKind, Error, PLUGIN_NAME, Registration, Wallpaper, WallpaperDisplay, WallpaperExt,
    WallpaperOptions, WallpaperTarget,
};

const COMMANDS: [&str; 3] = ["set_from_url", "set_from_base64", "request_permissions"];

fn mock_app() -> tauri::App<tauri::test::MockRuntime> {
    let app = tauri::test::mock_app();
    app.handle().plugin(tauri_plugin_wallpaper::init()).unwrap();
    app
}

#[test]
fn test_plugin_name_is_stable() {
    assert_eq!(PLUGIN_NAME, "wallpaper");
}

#[tokio::test]
async fn test_plugin_registers_desktop_backend_by_default() {
    let app = mock_app();
    let wallpaper = app.wallpaper();

    assert_eq!(wallpaper.backend_kind(), BackendKind::Desktop);
    assert_eq!(wallpaper.registration().name(), PLUGIN_NAME);

    let response = wallpaper.request_permissions().await.unwrap();
    assert_eq!(response.message, "Permissions already granted");
}

#[tokio::test]
async fn test_desktop_rejects_lock_screen_without_side_effects() {
    let app = mock_app();

    let options = WallpaperOptions::new("https://example.com/a.png", WallpaperTarget::Lock)
        .with_display(WallpaperDisplay::Fill);
    let err = app.wallpaper().set_from_url(options).await.unwrap_err();
    assert!(matches!(err, Error::PlatformUnavailable(_)));
}

#[tokio::test]
async fn test_empty_input_is_rejected() {
    let app = mock_app();

    let err = app
        .wallpaper()
        .set_from_base64(WallpaperOptions::new("", WallpaperTarget::Home))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArguments(_)));
}

#[tokio::test]
async fn test_unavailable_backend_rejects_every_operation() {
    let wallpaper = Wallpaper::new(Registration::unavailable(), WallpaperDisplay::Fill);

    let url = WallpaperOptions::new("https://example.com/a.png", WallpaperTarget::Home)
        .with_display(WallpaperDisplay::Fill);
    let base64 = WallpaperOptions::new("aGVsbG8=", WallpaperTarget::Both);

    let errors = [
        wallpaper.set_from_url(url).await.unwrap_err(),
        wallpaper.set_from_base64(base64).await.unwrap_err(),
        wallpaper.request_permissions().await.unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err, Error::PlatformUnavailable(_)));
        assert!(err.to_string().contains("not available"));

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "PlatformUnavailable");
    }
}

/// Builds an app whose webview may call every plugin command, with `config` as
/// the `plugins.wallpaper` section.
fn ipc_app(config: Value) -> (App<MockRuntime>, WebviewWindow<MockRuntime>) {
    let mut context: tauri::Context<MockRuntime> =
        tauri::test::mock_context(tauri::test::noop_assets());
    context.config_mut().plugins.0.insert(PLUGIN_NAME.to_string(), config);
    for command in COMMANDS {
        context
            .runtime_authority_mut()
            .__allow_command(format!("plugin:{PLUGIN_NAME}|{command}"), ExecutionContext::Local);
    }

    let app = tauri::test::mock_builder()
        .plugin(tauri_plugin_wallpaper::init())
        .build(context)
        .unwrap();
    let webview = WebviewWindowBuilder::new(&app, "main", Default::default()).build().unwrap();
    (app, webview)
}

fn invoke(webview: &WebviewWindow<MockRuntime>, command: &str, body: Value) -> Result<Value, Value> {
    let url = if cfg!(any(windows, target_os = "android")) {
        "http://tauri.localhost"
    } else {
        "tauri://localhost"
    };

    tauri::test::get_ipc_response(webview, InvokeRequest {
        cmd: format!("plugin:{PLUGIN_NAME}|{command}"),
        callback: CallbackFn(0),
        error: CallbackFn(1),
        url: url.parse().unwrap(),
        body: InvokeBody::Json(body),
        headers: Default::default(),
        invoke_key: INVOKE_KEY.to_string(),
    })
    .map(|body| body.deserialize::<Value>().unwrap())
}

fn assert_rejected(result: Result<Value, Value>, kind: &str) -> String {
    let err = result.unwrap_err();
    assert_eq!(err["kind"], kind, "unexpected rejection: {err}");
    let message = err["message"].as_str().unwrap().to_string();
    assert!(!message.is_empty());
    message
}

#[test]
fn test_ipc_request_permissions_resolves_on_desktop() {
    let (_app, webview) = ipc_app(json!({}));

    let response = invoke(&webview, "request_permissions", json!({})).unwrap();
    assert_eq!(response, json!({ "message": "Permissions already granted" }));
}

#[test]
fn test_ipc_disabled_desktop_backend_rejects_every_command() {
    let (_app, webview) = ipc_app(json!({ "desktopBackend": false }));
    let options = json!({
        "options": { "input": "https://example.com/a.png", "target": "home", "display": "fill" }
    });

    for (command, body) in [
        ("set_from_url", options.clone()),
        ("set_from_base64", json!({ "options": { "input": "aGVsbG8=", "target": "both" } })),
        ("request_permissions", json!({})),
    ] {
        let message = assert_rejected(invoke(&webview, command, body), "PlatformUnavailable");
        assert!(message.contains("not available"), "{command}: {message}");
    }
}

#[test]
fn test_ipc_lock_target_rejects_on_desktop() {
    let (_app, webview) = ipc_app(json!({}));

    let body = json!({ "options": { "input": "https://example.com/a.png", "target": "lock" } });
    let message = assert_rejected(invoke(&webview, "set_from_url", body), "PlatformUnavailable");
    assert!(message.contains("lock"));
}

#[test]
fn test_ipc_blank_input_rejects_with_invalid_arguments() {
    let (_app, webview) = ipc_app(json!({}));

    let body = json!({ "options": { "input": "  ", "target": "home" } });
    let message = assert_rejected(invoke(&webview, "set_from_base64", body), "InvalidArguments");
    assert_eq!(message, "Base64 string is required!");
}

#[test]
fn test_ipc_undecodable_base64_rejects_with_decode_failure() {
    let (_app, webview) = ipc_app(json!({}));

    let body = json!({ "options": { "input": "aGVsbG8gd29ybGQ=", "target": "home" } });
    assert_rejected(invoke(&webview, "set_from_base64", body), "DecodeFailure");
}
