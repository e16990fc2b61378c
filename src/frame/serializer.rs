//! Serialization of single values into the frame's brace grammar.
//!
//! Each value is wrapped as `{<value>}`. Floats always carry seven fractional
//! digits and the integer part is never truncated. Strings are written raw,
//! without quoting or escaping, so the output is not JSON.

pub struct Serializer;

impl Serializer {
    pub fn serialize_int(value: i64) -> String {
        format!("{{{}}}", value)
    }

    pub fn serialize_bool(value: bool) -> String {
        format!("{{{}}}", value)
    }

    pub fn serialize_float(value: f64) -> String {
        format!("{{{:.7}}}", value)
    }

    pub fn serialize_string(value: Option<&str>) -> String {
        //! A missing string serializes as an empty pair of braces.

        format!("{{{}}}", value.unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_have_seven_fractional_digits() {
        assert_eq!(Serializer::serialize_float(2.5), "{2.5000000}");
        assert_eq!(Serializer::serialize_float(-0.125), "{-0.1250000}");
        assert_eq!(
            Serializer::serialize_float(12345678901.0),
            "{12345678901.0000000}"
        );
    }

    #[test]
    fn floats_round_to_seven_digits() {
        assert_eq!(Serializer::serialize_float(1.0 / 3.0), "{0.3333333}");
        assert_eq!(Serializer::serialize_float(0.0), "{0.0000000}");
    }

    #[test]
    fn scalars_are_brace_wrapped() {
        assert_eq!(Serializer::serialize_int(42), "{42}");
        assert_eq!(Serializer::serialize_int(-7), "{-7}");
        assert_eq!(Serializer::serialize_bool(true), "{true}");
        assert_eq!(Serializer::serialize_string(Some("rust")), "{rust}");
        assert_eq!(Serializer::serialize_string(None), "{}");
    }
}
