use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

/// Delivery services offered on the shipping label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum Courier {
    #[serde(rename = "JNE")]
    Jne,
    #[serde(rename = "J&T")]
    Jnt,
    #[serde(rename = "SiCepat")]
    SiCepat,
    #[serde(rename = "Lion Parcel")]
    LionParcel,
}

impl Courier {
    pub const ALL: [Courier; 4] = [
        Courier::Jne,
        Courier::Jnt,
        Courier::SiCepat,
        Courier::LionParcel,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Courier::Jne => "JNE",
            Courier::Jnt => "J&T",
            Courier::SiCepat => "SiCepat",
            Courier::LionParcel => "Lion Parcel",
        }
    }
}

impl fmt::Display for Courier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Accepts display names and their compact forms in any case
/// ("J&T", "jnt", "Lion Parcel", "LionParcel", "lion_parcel").
impl FromStr for Courier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '&' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "jne" => Ok(Courier::Jne),
            "jt" | "jnt" => Ok(Courier::Jnt),
            "sicepat" => Ok(Courier::SiCepat),
            "lionparcel" => Ok(Courier::LionParcel),
            _ => Err(()),
        }
    }
}

/// Parse a cash-on-delivery answer ("ya"/"tidak", "yes"/"no", ...)
pub fn parse_cod_choice(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "ya" | "iya" | "y" | "yes" | "true" | "1" => Some(true),
        "tidak" | "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courier_from_str() {
        assert_eq!("JNE".parse::<Courier>(), Ok(Courier::Jne));
        assert_eq!("j&t".parse::<Courier>(), Ok(Courier::Jnt));
        assert_eq!("JNT".parse::<Courier>(), Ok(Courier::Jnt));
        assert_eq!("sicepat".parse::<Courier>(), Ok(Courier::SiCepat));
        assert_eq!("Lion Parcel".parse::<Courier>(), Ok(Courier::LionParcel));
        assert_eq!("LionParcel".parse::<Courier>(), Ok(Courier::LionParcel));
        assert!("Pos Indonesia".parse::<Courier>().is_err());
        assert!("".parse::<Courier>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for courier in Courier::ALL {
            assert_eq!(courier.to_string().parse::<Courier>(), Ok(courier));
        }
    }

    #[test]
    fn test_parse_cod_choice() {
        assert_eq!(parse_cod_choice("YA"), Some(true));
        assert_eq!(parse_cod_choice("yes"), Some(true));
        assert_eq!(parse_cod_choice(" tidak "), Some(false));
        assert_eq!(parse_cod_choice("NO"), Some(false));
        assert_eq!(parse_cod_choice("mungkin"), None);
    }
}
