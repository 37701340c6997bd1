use web_sys::window;

const TOKEN_KEY: &str = "mentoria_access_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the access token across reloads.
pub fn salvar_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn ler_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn limpar_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
