use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::use_sessao;
use crate::system::auth::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (senha, set_senha) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let sessao = use_sessao();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Re-entrant submit while a login is pending is a no-op.
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get();
        let senha_val = senha.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, senha_val).await {
                Ok(resposta) => {
                    // Switches to the main layout via the session gate.
                    sessao.entrar(resposta);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Mentoria"</h1>
                <h2>"Acesso ao painel"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="senha">"Senha"</label>
                        <input
                            type="password"
                            id="senha"
                            value=move || senha.get()
                            on:input=move |ev| set_senha.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
