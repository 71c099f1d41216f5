use yew::prelude::*;

use fasal::{redirect::RedirectGuard, routes::NavIntent, session::AuthStatus};

/// Send the visitor to the entry route whenever `status` changes to signed out.
#[hook]
pub fn use_auth_redirect(status: AuthStatus, on_navigate: Callback<NavIntent>) {
    let guard = use_mut_ref(RedirectGuard::new);

    use_effect_with(status, move |status| {
        let intent = guard.borrow_mut().observe(*status);
        if let Some(intent) = intent {
            on_navigate.emit(intent);
        }
    });
}
