//=============================================================================
// File: src/hooks/use_stores.rs
//=============================================================================
use crate::stores::AccountStore;
use crate::stores::AddFundsStore;
use crate::stores::AppStore;
use crate::stores::CalcStore;
use crate::stores::HistoryStore;
use crate::stores::LoginStore;
use crate::stores::Stores;
use dioxus::prelude::*;

/// Creates every store and provides them as context.
///
/// Call once, in the root component. The stores live as long as that
/// component, ie the whole session.
pub fn use_stores_provider() -> Stores {
    let app = use_signal(AppStore::from_env);
    let login = use_signal(LoginStore::default);
    let add_funds = use_signal(AddFundsStore::default);
    let calc = use_signal(CalcStore::default);
    let account = use_signal(AccountStore::default);
    let history = use_signal(HistoryStore::default);

    use_context_provider(|| {
        dioxus_logger::tracing::info!("api root: {:?}", app.peek().root);
        Stores {
            app,
            login,
            add_funds,
            calc,
            account,
            history,
        }
    })
}

/// Returns the stores provided by [`use_stores_provider`].
pub fn use_stores() -> Stores {
    use_context::<Stores>()
}
