use api::ApiClient;
use dioxus::prelude::*;
use store::{platform_store, AppConfig, PlatformStore};

/// The client every view talks to the API through.
pub type Api = ApiClient<PlatformStore>;

/// Provides [`AppConfig`] and an [`Api`] built from it.
#[component]
pub fn ApiProvider(config: AppConfig, children: Element) -> Element {
    let client = use_hook(|| ApiClient::from_config(&config, platform_store()));
    use_context_provider(|| config.clone());
    use_context_provider(|| client);

    rsx! {
        {children}
    }
}

pub fn use_api() -> Api {
    use_context::<Api>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}
