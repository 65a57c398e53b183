// ---------------------------------------------------------------------------
// Title parser: "Toyota Corolla GLi, 2015" → ("Toyota", "Corolla GLi")
// ---------------------------------------------------------------------------

/// Fields derived from a listing title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedTitle {
    pub brand: String,
    pub car_name: String,
}

/// Split a raw title into brand and car name.
///
/// * first whitespace token → brand
/// * remaining tokens joined by one space, cut at the first `,` → car name
/// * a single token yields an empty car name
/// * an empty or whitespace-only title yields empty brand and car name
pub fn parse_title(title: &str) -> ParsedTitle {
    let mut tokens = title.split_whitespace();

    let Some(brand) = tokens.next() else {
        return ParsedTitle::default();
    };

    let rest = tokens.collect::<Vec<_>>().join(" ");
    let car_name = match rest.split_once(',') {
        Some((before, _)) => before.to_string(),
        None => rest,
    };

    ParsedTitle {
        brand: brand.to_string(),
        car_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(brand: &str, car_name: &str) -> ParsedTitle {
        ParsedTitle {
            brand: brand.to_string(),
            car_name: car_name.to_string(),
        }
    }

    #[test]
    fn brand_and_name_cut_at_comma() {
        assert_eq!(
            parse_title("Toyota Corolla GLi, 2015"),
            parsed("Toyota", "Corolla GLi")
        );
    }

    #[test]
    fn single_token_has_empty_name() {
        assert_eq!(parse_title("Toyota"), parsed("Toyota", ""));
    }

    #[test]
    fn empty_and_blank_titles() {
        assert_eq!(parse_title(""), parsed("", ""));
        assert_eq!(parse_title("   \t "), parsed("", ""));
    }

    #[test]
    fn whitespace_runs_collapse_to_single_space() {
        assert_eq!(
            parse_title("  Honda   Civic \t Oriel  "),
            parsed("Honda", "Civic Oriel")
        );
    }

    #[test]
    fn no_comma_keeps_whole_name() {
        assert_eq!(
            parse_title("Suzuki Wagon R VXL"),
            parsed("Suzuki", "Wagon R VXL")
        );
    }

    #[test]
    fn only_first_comma_matters() {
        assert_eq!(
            parse_title("Nissan Dayz Highway Star, 2018, Auto"),
            parsed("Nissan", "Dayz Highway Star")
        );
        // comma glued to the brand's neighbour leaves an empty name
        assert_eq!(parse_title("Kia ,Sportage"), parsed("Kia", ""));
    }

    #[test]
    fn single_token_with_comma_is_still_the_brand() {
        assert_eq!(parse_title("Toyota,"), parsed("Toyota,", ""));
    }
}
