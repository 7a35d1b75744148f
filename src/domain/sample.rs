//! Fixed demonstration record.

use crate::domain::value::Value;

/// Paths shown by the demo, in display order.
pub const SAMPLE_QUERIES: [&str; 5] = [
    "user.friends.0.fullName",
    "user.address.street",
    "user.age",
    "user.fullName",
    "user.friends.0.age",
];

/// The demonstration user record.
///
/// `friends` is keyed by stringified index; the second friend has no `age`.
pub fn sample_record() -> Value {
    let address: Value = [
        ("street", Value::from("83727 Beatty Garden")),
        ("city", Value::from("Hamilton")),
    ]
    .into_iter()
    .collect();

    let friends: Value = [
        (
            "0",
            [
                ("fullName", Value::from("Franklin Kuhn")),
                ("age", Value::from(20)),
            ]
            .into_iter()
            .collect::<Value>(),
        ),
        (
            "1",
            [("fullName", Value::from("Hubert Sawayn"))]
                .into_iter()
                .collect::<Value>(),
        ),
    ]
    .into_iter()
    .collect();

    let user: Value = [
        ("fullName", Value::from("Janis Pagac")),
        ("age", Value::from(30)),
        ("address", address),
        ("friends", friends),
    ]
    .into_iter()
    .collect();

    [("user", user)].into_iter().collect()
}
