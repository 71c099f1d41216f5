use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use fasal::{
    errors::SessionError,
    info,
    session::{Session, User},
    warn,
};

const SESSION_KEY: &str = "fasal.session";

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: Session,
    /// Sign in with the given display name. A blank name signs in without one.
    pub sign_in: Callback<String>,
    pub sign_out: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

fn restore() -> Result<Option<User>, SessionError> {
    match LocalStorage::get::<User>(SESSION_KEY) {
        Ok(user) => Ok(Some(user)),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => Err(SessionError::Restore(err.to_string())),
    }
}

fn persist(user: &User) -> Result<(), SessionError> {
    LocalStorage::set(SESSION_KEY, user).map_err(|err| SessionError::Persist(err.to_string()))
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(|| Session::Loading);

    // Resolve the stored user once the provider is mounted
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let restored = match restore() {
                Ok(Some(user)) => {
                    info!("Restored session for {:?}", user.display_name);
                    Session::Authenticated(user)
                }
                Ok(None) => Session::Unauthenticated,
                Err(err) => {
                    warn!("{err}, starting signed out");
                    LocalStorage::delete(SESSION_KEY);
                    Session::Unauthenticated
                }
            };
            session.set(restored);
        });
    }

    let sign_in = {
        let session = session.clone();
        Callback::from(move |display_name: String| {
            let user = User::named(&display_name);
            if let Err(err) = persist(&user) {
                warn!("{err}, session will not survive a reload");
            }
            info!("Signed in as {:?}", user.display_name);
            session.set(Session::Authenticated(user));
        })
    };

    let sign_out = {
        let session = session.clone();
        Callback::from(move |_| {
            LocalStorage::delete(SESSION_KEY);
            info!("Signed out");
            session.set(Session::Unauthenticated);
        })
    };

    let context = SessionContext {
        session: (*session).clone(),
        sign_in,
        sign_out,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within a SessionProvider")
}
