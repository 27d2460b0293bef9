// src/app.rs
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::HttpActivityApi;
use crate::config::load_config;
use crate::notice::{BrowserScheduler, Notice, NoticeTimer};
use crate::state::{ActivityCard, BoardAction, BoardState, ParticipantRow, Roster, SignupForm};
use crate::workflow::{load_and_render, submit_signup, submit_unregister};

const LOADING: &str = "Loading activities...";
const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
const EMPTY_ROSTER: &str = "No one signed up yet. Be the first!";
const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(load_config);
    let api = use_memo(config.api_base.clone(), |base| HttpActivityApi::new(base.clone()));
    let state = use_reducer(BoardState::default);
    let timer = use_mut_ref(|| NoticeTimer::new(BrowserScheduler));

    // First load
    {
        let api = (*api).clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                load_and_render(&api, &|a| dispatcher.dispatch(a)).await;
            });
            || ()
        });
    }

    // Each new notice re-arms the dismissal; the old one is dropped.
    {
        let dispatcher = state.dispatcher();
        let timer = timer.clone();
        let ttl = config.notice_ttl_ms;
        let notice_id = state.notice.as_ref().map(|n| n.id);
        use_effect_with(notice_id, move |id| {
            if let Some(id) = *id {
                timer.borrow_mut().arm(ttl, move || {
                    dispatcher.dispatch(BoardAction::NoticeExpired(id));
                });
            }
            || ()
        });
    }

    // Nothing should fire into an unmounted board.
    {
        let timer = timer.clone();
        use_effect_with((), move |_| move || timer.borrow_mut().cancel());
    }

    let on_delete = {
        let api = (*api).clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |row: ParticipantRow| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                submit_unregister(&api, &row.activity, &row.email, &|a| dispatcher.dispatch(a))
                    .await;
            });
        })
    };

    let on_submit = {
        let api = (*api).clone();
        let dispatcher = state.dispatcher();
        let form = state.form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let SignupForm { activity, email } = form.clone();
            spawn_local(async move {
                submit_signup(&api, &activity, &email, &|a| dispatcher.dispatch(a)).await;
            });
        })
    };

    let on_email = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(BoardAction::EditEmail(input.value()));
        })
    };

    let on_activity = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            dispatcher.dispatch(BoardAction::SelectActivity(sel.value()));
        })
    };

    html! {
        <>
          <header>
            <h1>{ "Mergington High School" }</h1>
            <h2>{ "Extracurricular Activities" }</h2>
          </header>

          <main>
            <section id="activities-container">
              <h3>{ "Available Activities" }</h3>
              <div id="activities-list">
                { roster_view(&state.roster, &on_delete) }
              </div>
            </section>

            <section id="signup-container">
              <h3>{ "Sign Up for an Activity" }</h3>
              { signup_form(&state.form, &state.options, on_submit, on_email, on_activity) }
              { notice_view(state.notice.as_ref()) }
            </section>
          </main>
        </>
    }
}

fn roster_view(roster: &Roster, on_delete: &Callback<ParticipantRow>) -> Html {
    match roster {
        Roster::Loading => html! { <p>{ LOADING }</p> },
        Roster::Failed => html! { <p>{ LOAD_FAILED }</p> },
        Roster::Loaded(cards) => html! {
            <>{ for cards.iter().map(|card| activity_card(card, on_delete)) }</>
        },
    }
}

fn activity_card(card: &ActivityCard, on_delete: &Callback<ParticipantRow>) -> Html {
    let participants = if card.participants.is_empty() {
        html! { <p class="no-participants">{ EMPTY_ROSTER }</p> }
    } else {
        html! {
          <ul class="participants-list">
            { for card.participants.iter().map(|row| participant_row(row, on_delete)) }
          </ul>
        }
    };

    html! {
      <div class="activity-card" key={card.name.clone()}>
        <h4>{ card.name.clone() }</h4>
        <p>{ card.description.clone() }</p>
        <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
        <p><strong>{ "Availability:" }</strong>{ format!(" {} spots left", card.spots_left) }</p>
        <div class="participants-section">
          <strong>{ "Current Participants:" }</strong>
          { participants }
        </div>
      </div>
    }
}

fn participant_row(row: &ParticipantRow, on_delete: &Callback<ParticipantRow>) -> Html {
    let onclick = {
        let on_delete = on_delete.clone();
        let row = row.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_delete.emit(row.clone());
        })
    };

    html! {
      <li>
        <span>{ row.email.clone() }</span>
        <button class="delete-btn" {onclick}>{ "Delete" }</button>
      </li>
    }
}

fn signup_form(
    form: &SignupForm,
    options: &[String],
    onsubmit: Callback<SubmitEvent>,
    oninput: Callback<InputEvent>,
    onchange: Callback<Event>,
) -> Html {
    html! {
      <form id="signup-form" {onsubmit}>
        <div class="form-group">
          <label for="email">{ "Student Email:" }</label>
          <input
            type="email"
            id="email"
            required=true
            placeholder="your-email@mergington.edu"
            value={form.email.clone()}
            {oninput}
          />
        </div>
        <div class="form-group">
          <label for="activity">{ "Select Activity:" }</label>
          <select id="activity" required=true {onchange}>
            <option value="" selected={form.activity.is_empty()}>{ SELECT_PLACEHOLDER }</option>
            { for options.iter().map(|name| html! {
                <option value={name.clone()} selected={*name == form.activity}>{ name.clone() }</option>
            }) }
          </select>
        </div>
        <button type="submit">{ "Sign Up" }</button>
      </form>
    }
}

fn notice_view(notice: Option<&Notice>) -> Html {
    match notice {
        Some(n) => html! {
          <div id="message" class={classes!(n.tone.class())}>{ n.text.clone() }</div>
        },
        None => html! { <div id="message" class="hidden"></div> },
    }
}
