// src/state.rs
use std::rc::Rc;

use yew::prelude::*;

use crate::model::{Activity, ActivityCatalog};
use crate::notice::{Notice, Tone};

/// One participant line; also what the delete button sends.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn new(name: &str, activity: &Activity) -> Self {
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    activity: name.to_string(),
                    email: email.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Roster {
    #[default]
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupForm {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    CatalogLoaded(ActivityCatalog),
    CatalogFailed,
    Notify { tone: Tone, text: String },
    NoticeExpired(u64),
    SelectActivity(String),
    EditEmail(String),
    ResetForm,
}

/// Everything the page shows. The markup is derived from this alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    pub roster: Roster,
    /// Select options, without the placeholder. Survives a failed load.
    pub options: Vec<String>,
    pub form: SignupForm,
    pub notice: Option<Notice>,
    next_notice_id: u64,
}

#[cfg(test)]
impl BoardState {
    pub fn delete_actions(&self) -> Vec<&ParticipantRow> {
        match &self.roster {
            Roster::Loaded(cards) => cards.iter().flat_map(|c| c.participants.iter()).collect(),
            _ => Vec::new(),
        }
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BoardAction::CatalogLoaded(catalog) => {
                next.roster = Roster::Loaded(
                    catalog
                        .iter()
                        .map(|(name, activity)| ActivityCard::new(name, activity))
                        .collect(),
                );
                next.options = catalog.names().map(str::to_string).collect();
                if !next.options.contains(&next.form.activity) {
                    next.form.activity.clear();
                }
            }
            BoardAction::CatalogFailed => {
                next.roster = Roster::Failed;
            }
            BoardAction::Notify { tone, text } => {
                next.next_notice_id += 1;
                next.notice = Some(Notice {
                    id: next.next_notice_id,
                    tone,
                    text,
                });
            }
            BoardAction::NoticeExpired(id) => {
                if next.notice.as_ref().map(|n| n.id) == Some(id) {
                    next.notice = None;
                } else {
                    return self;
                }
            }
            BoardAction::SelectActivity(name) => next.form.activity = name,
            BoardAction::EditEmail(email) => next.form.email = email,
            BoardAction::ResetForm => next.form = SignupForm::default(),
        }
        next.into()
    }
}
