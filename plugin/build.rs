const COMMANDS: &[&str] = &["set_from_url", "set_from_base64", "request_permissions"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS)
        .android_path("android")
        .ios_path("ios")
        .build();
}
