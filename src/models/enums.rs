use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string did not match any variant of a closed enum.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {field}: '{value}'")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Species {
    Dog => "Dog",
    Cat => "Cat",
    Bird => "Bird",
    Rabbit => "Rabbit",
    Hamster => "Hamster",
    Fish => "Fish",
    Reptile => "Reptile",
    Other => "Other",
});

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Unknown => "Unknown",
});

str_enum!(Probability {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

str_enum!(
    /// Triage level assigned by the diagnostic provider.
    Urgency {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Emergency => "Emergency",
    }
);

str_enum!(
    /// Health-record-internal triage level, derived from [`Urgency`].
    Severity {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
);

/// Medication class from the provider contract. Only over-the-counter
/// entries are eligible for automatic persistence into health records.
/// Serde renames keep the wire strings ("Over-the-counter") while the
/// variant name stays short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicationType {
    #[serde(rename = "Over-the-counter")]
    Otc,
    Prescription,
}

impl MedicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Otc => "Over-the-counter",
            Self::Prescription => "Prescription",
        }
    }
}

impl std::fmt::Display for MedicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MedicationType {
    type Err = InvalidEnum;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Over-the-counter" | "OTC" => Ok(Self::Otc),
            "Prescription" => Ok(Self::Prescription),
            _ => Err(InvalidEnum {
                field: "MedicationType".into(),
                value: s.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn species_round_trip() {
        for (variant, s) in [
            (Species::Dog, "Dog"),
            (Species::Cat, "Cat"),
            (Species::Bird, "Bird"),
            (Species::Rabbit, "Rabbit"),
            (Species::Hamster, "Hamster"),
            (Species::Fish, "Fish"),
            (Species::Reptile, "Reptile"),
            (Species::Other, "Other"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Species::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn urgency_round_trip() {
        for (variant, s) in [
            (Urgency::Low, "Low"),
            (Urgency::Medium, "Medium"),
            (Urgency::High, "High"),
            (Urgency::Emergency, "Emergency"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Urgency::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn severity_round_trip() {
        for (variant, s) in [
            (Severity::Low, "Low"),
            (Severity::Medium, "Medium"),
            (Severity::High, "High"),
            (Severity::Critical, "Critical"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Severity::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn medication_type_uses_wire_strings() {
        assert_eq!(MedicationType::Otc.as_str(), "Over-the-counter");
        assert_eq!(
            MedicationType::from_str("Prescription").unwrap(),
            MedicationType::Prescription,
        );
        // Providers occasionally abbreviate
        assert_eq!(
            MedicationType::from_str("OTC").unwrap(),
            MedicationType::Otc,
        );
        let json = serde_json::to_string(&MedicationType::Otc).unwrap();
        assert_eq!(json, "\"Over-the-counter\"");
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Species::from_str("Dragon").is_err());
        assert!(Urgency::from_str("urgent").is_err());
        assert!(Severity::from_str("").is_err());
    }

    #[test]
    fn invalid_enum_error_names_field_and_value() {
        let err = Urgency::from_str("Catastrophic").unwrap_err();
        assert_eq!(err.field, "Urgency");
        assert_eq!(err.value, "Catastrophic");
        assert_eq!(err.to_string(), "invalid Urgency: 'Catastrophic'");
    }
}
