//! The shipment-label dialogue as a closed state machine.
//!
//! Each collecting state carries exactly the answers gathered so far, so a
//! state can never hold a phone number without a name, or a courier without
//! an address.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

use super::courier::{parse_cod_choice, Courier};
use crate::shared::constants::{
    MIN_ADDRESS_LENGTH, MIN_NAME_LENGTH, MIN_PHONE_LENGTH, SESSION_ENDED_MESSAGE,
};
use crate::shared::validation::PHONE_REGEX;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    CollectingName,
    CollectingPhone {
        name: String,
    },
    CollectingAddress {
        name: String,
        phone: String,
    },
    CollectingCourier {
        name: String,
        phone: String,
        address: String,
    },
    CollectingCod {
        name: String,
        phone: String,
        address: String,
        courier: Courier,
    },
}

/// Which answer the dialogue is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStep {
    Idle,
    Name,
    Phone,
    Address,
    Courier,
    Cod,
}

impl DialogueStep {
    /// Prompt shown to the user for this step
    pub fn prompt(&self) -> &'static str {
        match self {
            DialogueStep::Idle => "Tidak ada pembuatan resi yang sedang berjalan",
            DialogueStep::Name => "Masukkan nama penerima:",
            DialogueStep::Phone => "Masukkan nomor HP penerima:",
            DialogueStep::Address => "Masukkan alamat lengkap:",
            DialogueStep::Courier => "Pilih jasa kirim:",
            DialogueStep::Cod => "COD Ongkir:",
        }
    }
}

impl fmt::Display for DialogueStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DialogueStep::Idle => "idle",
            DialogueStep::Name => "name",
            DialogueStep::Phone => "phone",
            DialogueStep::Address => "address",
            DialogueStep::Courier => "courier",
            DialogueStep::Cod => "cod",
        };
        f.write_str(name)
    }
}

/// Input delivered to the dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueInput<'a> {
    /// Free text typed by the user
    Text(&'a str),
    /// Courier picked from the offered choices
    Courier(&'a str),
    /// Cash-on-delivery picked from the offered choices
    Cod(bool),
}

/// Every answer of a finished dialogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub courier: Courier,
    pub cod: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Answer accepted, waiting for the next one
    Advanced(ConversationState),
    /// Last answer accepted; the form is ready to be finalized
    Completed(ConversationForm),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogueError {
    #[error("Nama minimal {} karakter", MIN_NAME_LENGTH)]
    NameTooShort,

    #[error("Nomor HP tidak valid (hanya angka, minimal {} digit)", MIN_PHONE_LENGTH)]
    InvalidPhone,

    #[error("Alamat terlalu pendek (minimal {} karakter)", MIN_ADDRESS_LENGTH)]
    AddressTooShort,

    #[error("Jasa kirim tidak dikenal: {0}")]
    UnknownCourier(String),

    #[error("Pilihan COD tidak valid: {0}")]
    InvalidCodChoice(String),

    #[error("Input tidak sesuai, langkah saat ini: {0}")]
    UnexpectedInput(DialogueStep),

    #[error("{}", SESSION_ENDED_MESSAGE)]
    NotInDialogue,
}

impl ConversationState {
    pub fn step(&self) -> DialogueStep {
        match self {
            ConversationState::Idle => DialogueStep::Idle,
            ConversationState::CollectingName => DialogueStep::Name,
            ConversationState::CollectingPhone { .. } => DialogueStep::Phone,
            ConversationState::CollectingAddress { .. } => DialogueStep::Address,
            ConversationState::CollectingCourier { .. } => DialogueStep::Courier,
            ConversationState::CollectingCod { .. } => DialogueStep::Cod,
        }
    }

    /// Validate `input` against the current step.
    ///
    /// On error the caller keeps the current state unchanged.
    pub fn advance(&self, input: DialogueInput<'_>) -> Result<Transition, DialogueError> {
        match (self, input) {
            (ConversationState::Idle, _) => Err(DialogueError::NotInDialogue),

            (ConversationState::CollectingName, DialogueInput::Text(text)) => {
                let name = text.trim();
                if name.chars().count() < MIN_NAME_LENGTH {
                    return Err(DialogueError::NameTooShort);
                }
                Ok(Transition::Advanced(ConversationState::CollectingPhone {
                    name: name.to_string(),
                }))
            }

            (ConversationState::CollectingPhone { name }, DialogueInput::Text(text)) => {
                let phone = text.trim();
                if !PHONE_REGEX.is_match(phone) {
                    return Err(DialogueError::InvalidPhone);
                }
                Ok(Transition::Advanced(ConversationState::CollectingAddress {
                    name: name.clone(),
                    phone: phone.to_string(),
                }))
            }

            (ConversationState::CollectingAddress { name, phone }, DialogueInput::Text(text)) => {
                let address = text.trim();
                if address.chars().count() < MIN_ADDRESS_LENGTH {
                    return Err(DialogueError::AddressTooShort);
                }
                Ok(Transition::Advanced(ConversationState::CollectingCourier {
                    name: name.clone(),
                    phone: phone.clone(),
                    address: address.to_string(),
                }))
            }

            (
                ConversationState::CollectingCourier {
                    name,
                    phone,
                    address,
                },
                DialogueInput::Text(choice) | DialogueInput::Courier(choice),
            ) => {
                let courier = choice
                    .parse::<Courier>()
                    .map_err(|_| DialogueError::UnknownCourier(choice.trim().to_string()))?;
                Ok(Transition::Advanced(ConversationState::CollectingCod {
                    name: name.clone(),
                    phone: phone.clone(),
                    address: address.clone(),
                    courier,
                }))
            }

            (
                ConversationState::CollectingCod {
                    name,
                    phone,
                    address,
                    courier,
                },
                input @ (DialogueInput::Text(_) | DialogueInput::Cod(_)),
            ) => {
                let cod = match input {
                    DialogueInput::Cod(cod) => cod,
                    DialogueInput::Text(text) | DialogueInput::Courier(text) => parse_cod_choice(text)
                        .ok_or_else(|| DialogueError::InvalidCodChoice(text.trim().to_string()))?,
                };
                Ok(Transition::Completed(ConversationForm {
                    name: name.clone(),
                    phone: phone.clone(),
                    address: address.clone(),
                    courier: *courier,
                    cod,
                }))
            }

            (state, _) => Err(DialogueError::UnexpectedInput(state.step())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advanced(state: &ConversationState, input: DialogueInput<'_>) -> ConversationState {
        match state.advance(input) {
            Ok(Transition::Advanced(next)) => next,
            other => panic!("expected to advance, got {:?}", other),
        }
    }

    fn at_courier_step() -> ConversationState {
        ConversationState::CollectingCourier {
            name: "Budi".to_string(),
            phone: "081234567890".to_string(),
            address: "Jl. Merdeka No. 10".to_string(),
        }
    }

    #[test]
    fn test_full_dialogue() {
        let state = ConversationState::CollectingName;
        let state = advanced(&state, DialogueInput::Text("Budi"));
        assert_eq!(state.step(), DialogueStep::Phone);
        let state = advanced(&state, DialogueInput::Text("081234567890"));
        assert_eq!(state.step(), DialogueStep::Address);
        let state = advanced(&state, DialogueInput::Text("Jl. Merdeka No. 10"));
        assert_eq!(state.step(), DialogueStep::Courier);
        let state = advanced(&state, DialogueInput::Courier("JNE"));
        assert_eq!(state.step(), DialogueStep::Cod);

        let form = match state.advance(DialogueInput::Cod(true)) {
            Ok(Transition::Completed(form)) => form,
            other => panic!("expected completion, got {:?}", other),
        };
        assert_eq!(
            form,
            ConversationForm {
                name: "Budi".to_string(),
                phone: "081234567890".to_string(),
                address: "Jl. Merdeka No. 10".to_string(),
                courier: Courier::Jne,
                cod: true,
            }
        );
    }

    #[test]
    fn test_name_too_short() {
        let state = ConversationState::CollectingName;
        assert_eq!(
            state.advance(DialogueInput::Text("Al")),
            Err(DialogueError::NameTooShort)
        );
        assert_eq!(
            state.advance(DialogueInput::Text("  Al  ")),
            Err(DialogueError::NameTooShort)
        );
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        let state = ConversationState::CollectingPhone {
            name: "Budi".to_string(),
        };
        assert_eq!(
            state.advance(DialogueInput::Text("12345")),
            Err(DialogueError::InvalidPhone)
        );
        assert_eq!(
            state.advance(DialogueInput::Text("08123abc7890")),
            Err(DialogueError::InvalidPhone)
        );
        // The rejected state still asks for the phone
        assert_eq!(state.step(), DialogueStep::Phone);
    }

    #[test]
    fn test_address_too_short() {
        let state = ConversationState::CollectingAddress {
            name: "Budi".to_string(),
            phone: "081234567890".to_string(),
        };
        assert_eq!(
            state.advance(DialogueInput::Text("Jl. A")),
            Err(DialogueError::AddressTooShort)
        );
    }

    #[test]
    fn test_courier_accepted_as_text() {
        let state = advanced(&at_courier_step(), DialogueInput::Text("lion parcel"));
        assert!(matches!(
            state,
            ConversationState::CollectingCod {
                courier: Courier::LionParcel,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_courier_rejected() {
        assert_eq!(
            at_courier_step().advance(DialogueInput::Courier("Pos")),
            Err(DialogueError::UnknownCourier("Pos".to_string()))
        );
    }

    #[test]
    fn test_cod_choice_rejected() {
        let state = advanced(&at_courier_step(), DialogueInput::Courier("J&T"));
        assert_eq!(
            state.advance(DialogueInput::Text("maybe")),
            Err(DialogueError::InvalidCodChoice("maybe".to_string()))
        );
        assert!(matches!(
            state.advance(DialogueInput::Text("tidak")),
            Ok(Transition::Completed(ConversationForm { cod: false, .. }))
        ));
    }

    #[test]
    fn test_out_of_order_input_rejected() {
        let state = ConversationState::CollectingName;
        assert_eq!(
            state.advance(DialogueInput::Courier("JNE")),
            Err(DialogueError::UnexpectedInput(DialogueStep::Name))
        );
        assert_eq!(
            at_courier_step().advance(DialogueInput::Cod(true)),
            Err(DialogueError::UnexpectedInput(DialogueStep::Courier))
        );
    }

    #[test]
    fn test_idle_accepts_nothing() {
        assert_eq!(
            ConversationState::Idle.advance(DialogueInput::Text("Budi")),
            Err(DialogueError::NotInDialogue)
        );
    }
}
