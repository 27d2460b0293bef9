// src/workflow.rs
//
// The request -> dispatch cycles behind the page. Each runs to completion
// with exactly one outcome; nothing here retries.

use crate::api::ActivityApi;
use crate::error::ApiError;
use crate::notice::Tone;
use crate::state::BoardAction;

pub const GENERIC_REJECTION: &str = "An error occurred";
pub const SIGNUP_RETRY: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_RETRY: &str = "Failed to unregister. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    fn retry_text(self) -> &'static str {
        match self {
            Mutation::Signup => SIGNUP_RETRY,
            Mutation::Unregister => UNREGISTER_RETRY,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Mutation::Signup => "signing up",
            Mutation::Unregister => "unregistering",
        }
    }
}

/// Fetches the whole catalog and replaces the board with it.
pub async fn load_and_render<A: ActivityApi>(api: &A, dispatch: &impl Fn(BoardAction)) {
    match api.fetch_catalog().await {
        Ok(catalog) => {
            log::debug!("loaded {} activities", catalog.len());
            dispatch(BoardAction::CatalogLoaded(catalog));
        }
        Err(e) => {
            log::error!("Error fetching activities: {e}");
            dispatch(BoardAction::CatalogFailed);
        }
    }
}

pub async fn submit_signup<A: ActivityApi>(
    api: &A,
    activity: &str,
    email: &str,
    dispatch: &impl Fn(BoardAction),
) {
    mutate(api, Mutation::Signup, activity, email, dispatch).await
}

pub async fn submit_unregister<A: ActivityApi>(
    api: &A,
    activity: &str,
    email: &str,
    dispatch: &impl Fn(BoardAction),
) {
    mutate(api, Mutation::Unregister, activity, email, dispatch).await
}

async fn mutate<A: ActivityApi>(
    api: &A,
    mutation: Mutation,
    activity: &str,
    email: &str,
    dispatch: &impl Fn(BoardAction),
) {
    let result = match mutation {
        Mutation::Signup => api.signup(activity, email).await,
        Mutation::Unregister => api.unregister(activity, email).await,
    };

    match result {
        Ok(message) => {
            dispatch(BoardAction::Notify {
                tone: Tone::Success,
                text: message,
            });
            if mutation == Mutation::Signup {
                dispatch(BoardAction::ResetForm);
            }
            load_and_render(api, dispatch).await;
        }
        Err(ApiError::Status { status, detail }) => {
            log::debug!("{} rejected with HTTP {status}", mutation.verb());
            dispatch(BoardAction::Notify {
                tone: Tone::Error,
                text: detail.unwrap_or_else(|| GENERIC_REJECTION.to_string()),
            });
        }
        Err(e) => {
            log::error!("Error {}: {e}", mutation.verb());
            dispatch(BoardAction::Notify {
                tone: Tone::Error,
                text: mutation.retry_text().to_string(),
            });
        }
    }
}
