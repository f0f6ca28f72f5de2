use crate::model::DashboardSummary;

/// Render the human-readable dashboard text.
///
/// Each line has its own guard, so a summary with only some sources filled in
/// still yields the lines it can. An all-null summary renders as `""`.
pub fn format_message(summary: &DashboardSummary) -> String {
    let mut message = String::new();

    if let (Some(city), Some(country)) = (&summary.city, &summary.country) {
        message.push_str(&format!("{city} is in {country}.\n"));
    }

    if let (Some(temperature), Some(weather)) = (summary.temperature, &summary.weather) {
        message.push_str(&format!(
            "Today there are {temperature} degrees and the weather is {weather}.\n"
        ));
    }

    if let Some(airport) = &summary.airport {
        message.push_str(&format!("The main airport is {airport}.\n"));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> DashboardSummary {
        DashboardSummary {
            city: Some("London".into()),
            country: Some("UK".into()),
            temperature: Some(18.0),
            weather: Some("Partly cloudy".into()),
            airport: Some("Heathrow".into()),
        }
    }

    #[test]
    fn full_summary_renders_every_line() {
        assert_eq!(
            format_message(&london()),
            "London is in UK.\n\
             Today there are 18 degrees and the weather is Partly cloudy.\n\
             The main airport is Heathrow.\n"
        );
    }

    #[test]
    fn empty_summary_renders_nothing() {
        assert_eq!(format_message(&DashboardSummary::default()), "");
    }

    #[test]
    fn guards_are_independent() {
        let summary = DashboardSummary {
            temperature: None,
            weather: None,
            ..london()
        };
        assert_eq!(format_message(&summary), "London is in UK.\nThe main airport is Heathrow.\n");

        let summary = DashboardSummary {
            city: None,
            airport: None,
            ..london()
        };
        assert_eq!(
            format_message(&summary),
            "Today there are 18 degrees and the weather is Partly cloudy.\n"
        );
    }

    #[test]
    fn line_needs_both_halves_of_its_pair() {
        let summary = DashboardSummary {
            country: None,
            weather: None,
            airport: None,
            ..london()
        };
        assert_eq!(format_message(&summary), "");
    }

    #[test]
    fn zero_and_fractional_temperatures_are_printed() {
        let summary = DashboardSummary {
            temperature: Some(0.0),
            city: None,
            airport: None,
            ..london()
        };
        assert_eq!(
            format_message(&summary),
            "Today there are 0 degrees and the weather is Partly cloudy.\n"
        );

        let summary = DashboardSummary {
            temperature: Some(-2.5),
            ..summary
        };
        assert!(format_message(&summary).starts_with("Today there are -2.5 degrees"));
    }

    #[test]
    fn formatting_is_pure() {
        let summary = london();
        assert_eq!(format_message(&summary), format_message(&summary));
    }
}
