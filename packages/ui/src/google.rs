//! Google Identity Services sign-in button.
//!
//! The GIS client script is injected once per page. Its credential callback
//! posts back through the eval channel, which stays open for as long as the
//! button is mounted.

use dioxus::prelude::*;

const GSI_CLIENT_URL: &str = "https://accounts.google.com/gsi/client";
const BUTTON_ID: &str = "google-signin-button";

/// Quote `s` as a JavaScript string literal.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn bridge_script(client_id: &str, element_id: &str) -> String {
    format!(
        r#"(function() {{
            function init() {{
                google.accounts.id.initialize({{
                    client_id: {client_id},
                    callback: function(response) {{ dioxus.send(response.credential); }},
                    auto_select: false,
                    cancel_on_tap_outside: true
                }});
                google.accounts.id.renderButton(document.getElementById({element_id}), {{
                    theme: 'outline',
                    size: 'large',
                    text: 'signin_with',
                    shape: 'rectangular'
                }});
            }}
            if (window.google && window.google.accounts) {{ init(); return; }}
            var script = document.getElementById('gsi-client');
            if (!script) {{
                script = document.createElement('script');
                script.id = 'gsi-client';
                script.src = {src};
                script.async = true;
                script.defer = true;
                document.head.appendChild(script);
            }}
            script.addEventListener('load', init);
        }})();"#,
        client_id = js_string(client_id),
        element_id = js_string(element_id),
        src = js_string(GSI_CLIENT_URL),
    )
}

/// Renders Google's button and reports each ID token it hands back.
#[component]
pub fn GoogleSignIn(client_id: String, on_credential: EventHandler<String>) -> Element {
    use_effect(move || {
        let js = bridge_script(&client_id, BUTTON_ID);
        spawn(async move {
            let mut eval = document::eval(&js);
            loop {
                match eval.recv::<String>().await {
                    Ok(credential) => on_credential.call(credential),
                    Err(e) => {
                        tracing::debug!("Google sign-in bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    rsx! {
        div { id: BUTTON_ID, class: "google-signin" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_is_quoted() {
        assert_eq!(js_string(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(js_string("line\nbreak"), r#""line\nbreak""#);
    }

    #[test]
    fn test_bridge_script_wires_client_and_button() {
        let js = bridge_script("123.apps.googleusercontent.com", BUTTON_ID);
        assert!(js.contains(r#"client_id: "123.apps.googleusercontent.com""#));
        assert!(js.contains(r#"document.getElementById("google-signin-button")"#));
        assert!(js.contains(r#"script.src = "https://accounts.google.com/gsi/client""#));
        assert!(js.contains("dioxus.send(response.credential)"));
    }
}
