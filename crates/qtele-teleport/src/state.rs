//! The state prepared on the sender's qubit.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Which state is prepared on `q0` before teleportation.
///
/// Any label other than `"+"` or `"1"` is kept verbatim as
/// [`InitialState::Other`] and leaves `q0` in |0⟩.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InitialState {
    /// |+⟩, prepared with H.
    #[default]
    Plus,
    /// |1⟩, prepared with X.
    One,
    /// Unrecognized label; no preparation gate.
    Other(String),
}

impl InitialState {
    pub fn label(&self) -> &str {
        match self {
            InitialState::Plus => "+",
            InitialState::One => "1",
            InitialState::Other(label) => label,
        }
    }

    /// Whether a preparation gate is applied.
    pub fn is_prepared(&self) -> bool {
        !matches!(self, InitialState::Other(_))
    }
}

impl From<&str> for InitialState {
    fn from(label: &str) -> Self {
        match label {
            "+" => InitialState::Plus,
            "1" => InitialState::One,
            other => InitialState::Other(other.to_string()),
        }
    }
}

impl From<String> for InitialState {
    fn from(label: String) -> Self {
        match label.as_str() {
            "+" => InitialState::Plus,
            "1" => InitialState::One,
            _ => InitialState::Other(label),
        }
    }
}

impl From<InitialState> for String {
    fn from(state: InitialState) -> Self {
        match state {
            InitialState::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl FromStr for InitialState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for InitialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reference amplitudes `[α, β]` expected on the receiver's qubit.
///
/// `"1"` maps to |1⟩. `"+"` and every other label map to |+⟩.
pub fn teleported_state(initial_state: &InitialState) -> [Complex64; 2] {
    match initial_state {
        InitialState::One => [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        InitialState::Plus | InitialState::Other(_) => {
            let amp = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
            [amp, amp]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("+".parse::<InitialState>().unwrap(), InitialState::Plus);
        assert_eq!("1".parse::<InitialState>().unwrap(), InitialState::One);
        assert_eq!(
            "0".parse::<InitialState>().unwrap(),
            InitialState::Other("0".into())
        );
        assert_eq!(InitialState::default(), InitialState::Plus);
    }

    #[test]
    fn test_label_round_trips() {
        for label in ["+", "1", "-", "psi"] {
            let state = InitialState::from(label);
            assert_eq!(state.to_string(), label);
            assert_eq!(String::from(state), label);
        }
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&InitialState::One).unwrap();
        assert_eq!(json, r#""1""#);

        let state: InitialState = serde_json::from_str(r#""+""#).unwrap();
        assert_eq!(state, InitialState::Plus);
    }

    #[test]
    fn test_reference_vectors() {
        let one = teleported_state(&InitialState::One);
        assert_eq!(one[0], Complex64::new(0.0, 0.0));
        assert_eq!(one[1], Complex64::new(1.0, 0.0));

        let plus = teleported_state(&InitialState::Plus);
        assert!((plus[0].re - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(plus[0], plus[1]);
        assert_eq!(plus[0].im, 0.0);

        assert_eq!(teleported_state(&"0".into()), plus);
    }
}
