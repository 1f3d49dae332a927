use jetway::decode::{BoardingPass, Error, decode};
use jetway::layout::repeated::PassengerStatus;
use jetway::layout::unique::Format;

/// A synthetic single-leg payload, assembled field by field.
const PAYLOAD: &str = concat!(
    "M",                    // Format code.
    "1",                    // Leg count.
    "DESILVA/MARIA       ", // Passenger name (20).
    "E",                    // Electronic ticket indicator.
    "X4Q9RT ",              // Record locator (7).
    "GRU",                  // Origin (3).
    "LIS",                  // Destination (3).
    "TP ",                  // Carrier (3).
    "0087 ",                // Flight number (5).
    "227",                  // Flight date (3).
    "Y",                    // Fare class.
    "012A",                 // Seat (4).
    "00045",                // Check-in sequence (5).
    "1",                    // Passenger status.
);

/// Replace a field of the fixture in place. Offsets are character positions,
/// which coincide with byte offsets in the all-ASCII fixture.
fn with_field(start: usize, replacement: &str) -> String {
    let mut payload = String::from(PAYLOAD);
    payload.replace_range(start..start + replacement.len(), replacement);
    payload
}

#[test]
fn mandatory_items_cover_the_minimum_length() {
    assert_eq!(jetway::layout::MINIMUM_LENGTH, 58);
    assert_eq!(PAYLOAD.chars().count(), 58);
}

#[test]
fn decodes_every_field_of_a_single_leg() {
    let pass = decode(PAYLOAD).unwrap();

    assert_eq!(
        pass,
        BoardingPass {
            format: Format::Multiple,
            legs: 1,
            passenger: jetway::layout::unique::Name {
                last: "DESILVA",
                first: "MARIA",
            },
            origin: "GRU",
            destination: "LIS",
            carrier: "TP",
            flight_number: "0087",
            fare_class: 'Y',
            seat: "012A",
            check_in_sequence: "00045",
            status: PassengerStatus::CheckedIn,
        }
    );
}

#[test]
fn formats_the_summary_line() {
    let pass = decode(PAYLOAD).unwrap();

    assert_eq!(pass.to_string(), "TP0087 MARIADESILVA 012A checkedIn Y");
    assert_eq!(pass.summary(), "TP0087 MARIADESILVA 012A checkedIn Y");
}

#[test]
fn rejects_an_empty_payload() {
    assert!(matches!(decode(""), Err(Error::TooShort { length: 0 })));
}

#[test]
fn rejects_a_payload_one_character_short() {
    let payload = &PAYLOAD[..PAYLOAD.len() - 1];
    assert!(matches!(
        decode(payload),
        Err(Error::TooShort { length: 57 })
    ));
}

#[test]
fn rejects_an_unrecognized_format_code() {
    // The rest of the payload is well-formed; the format code alone decides.
    for code in ['X', 's', 'm', '0', ' '] {
        let payload = with_field(0, &code.to_string());
        assert!(matches!(decode(&payload), Err(Error::FormatCode(_))));
    }
}

#[test]
fn accepts_the_single_leg_format_code() {
    let payload = with_field(0, "S");
    assert_eq!(decode(&payload).unwrap().format, Format::Single);
}

#[test]
fn rejects_a_non_digit_leg_count() {
    for count in ['A', '/', ' '] {
        let payload = with_field(1, &count.to_string());
        assert!(matches!(decode(&payload), Err(Error::LegCount(_))));
    }
}

#[test]
fn surfaces_the_leg_count_but_decodes_one_leg() {
    let payload = with_field(1, "4");
    let pass = decode(&payload).unwrap();

    assert_eq!(pass.legs, 4);
    assert_eq!(pass.seat, "012A");
}

#[test]
fn splits_a_name_without_a_delimiter() {
    let payload = with_field(2, "VANDERBERG          ");
    let pass = decode(&payload).unwrap();

    assert_eq!(pass.passenger.last, "VANDERBERG");
    assert_eq!(pass.passenger.first, "");
}

#[test]
fn splits_a_name_on_the_first_delimiter() {
    // A second delimiter ends the given name; the remainder is dropped.
    let payload = with_field(2, "DEL/CARMEN/JOSE     ");
    let pass = decode(&payload).unwrap();

    assert_eq!(pass.passenger.last, "DEL");
    assert_eq!(pass.passenger.first, "CARMEN");
}

#[test]
fn skips_empty_name_parts_between_delimiters() {
    let payload = with_field(2, "SMITH//JOHN         ");
    let pass = decode(&payload).unwrap();

    assert_eq!(pass.passenger.last, "SMITH");
    assert_eq!(pass.passenger.first, "JOHN");
}

#[test]
fn skips_a_leading_name_delimiter() {
    let payload = with_field(2, "/JOHN               ");
    let pass = decode(&payload).unwrap();

    assert_eq!(pass.passenger.last, "JOHN");
    assert_eq!(pass.passenger.first, "");
}

#[test]
fn decodes_an_all_delimiter_name_as_empty() {
    let payload = with_field(2, "////                ");
    let pass = decode(&payload).unwrap();

    assert_eq!(pass.passenger.last, "");
    assert_eq!(pass.passenger.first, "");
}

#[test]
fn trims_trailing_whitespace_only() {
    let payload = with_field(2, " NG/BO              ");
    let pass = decode(&payload).unwrap();

    // Leading whitespace survives; only trailing whitespace is trimmed.
    assert_eq!(pass.passenger.last, " NG");
    assert_eq!(pass.passenger.first, "BO");
}

#[test]
fn maps_every_passenger_status_code() {
    let expected = [
        ('0', PassengerStatus::NotCheckedIn),
        ('1', PassengerStatus::CheckedIn),
        ('2', PassengerStatus::NotCheckedIn),
        ('3', PassengerStatus::CheckedIn),
        ('4', PassengerStatus::Other),
        ('5', PassengerStatus::Other),
        ('6', PassengerStatus::Other),
        ('7', PassengerStatus::Standby),
        ('8', PassengerStatus::Other),
        ('9', PassengerStatus::Other),
        ('A', PassengerStatus::Other),
        ('B', PassengerStatus::Unknown),
        ('a', PassengerStatus::Unknown),
        (' ', PassengerStatus::Unknown),
        ('/', PassengerStatus::Unknown),
    ];

    for (code, status) in expected {
        let payload = with_field(57, &code.to_string());
        assert_eq!(decode(&payload).unwrap().status, status, "code {code:?}");
    }
}

#[test]
fn accepts_unvalidated_fields_as_found() {
    // Airport, seat, and sequence fields carry no validation; salvage from a
    // noisy scan is preferred over rejection.
    let payload = with_field(30, "1!#");
    let pass = decode(&payload).unwrap();

    assert_eq!(pass.origin, "1!#");
}

#[test]
fn ignores_characters_beyond_the_mandatory_items() {
    let mut payload = String::from(PAYLOAD);
    payload.push_str(">218  B1A              2A55559467 1");

    assert_eq!(decode(&payload).unwrap(), decode(PAYLOAD).unwrap());
}

#[test]
fn decoding_is_idempotent() {
    assert_eq!(decode(PAYLOAD).unwrap(), decode(PAYLOAD).unwrap());
}

#[test]
fn errors_describe_the_failure() {
    let err = decode("").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Payload is shorter than the mandatory items (0 of 58 characters)."
    );

    let err = decode(&with_field(0, "X")).unwrap_err();
    assert_eq!(err.to_string(), "Unrecognized format code ('X').");
}
