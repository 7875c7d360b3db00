//! Behavior of the option-selection builder.

use reclaim::{Error, SelectableOption, SelectionBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Topping {
    Ham,
    Mushroom,
    Onion,
    Pepper,
}

impl SelectableOption for Topping {
    const ALL: &'static [Self] = &[
        Topping::Ham,
        Topping::Mushroom,
        Topping::Onion,
        Topping::Pepper,
    ];

    fn name(&self) -> &'static str {
        match self {
            Topping::Ham => "ham",
            Topping::Mushroom => "mushroom",
            Topping::Onion => "onion",
            Topping::Pepper => "pepper",
        }
    }
}

#[test]
fn builds_the_selected_set() {
    let selection = SelectionBuilder::new()
        .select(Topping::Ham)
        .select(Topping::Pepper)
        .select(Topping::Ham)
        .build();

    assert_eq!(selection.len(), 2);
    assert!(selection.contains(Topping::Ham));
    assert!(selection.contains(Topping::Pepper));
    assert!(!selection.contains(Topping::Mushroom));
    assert_eq!(
        selection.options().collect::<Vec<_>>(),
        vec![Topping::Ham, Topping::Pepper]
    );
}

#[test]
fn names_round_trip_through_the_enumeration() {
    for topping in Topping::ALL {
        assert_eq!(Topping::from_name(topping.name()), Some(*topping));
    }
}

#[test]
fn unknown_names_fail_at_the_point_of_selection() {
    let err = SelectionBuilder::<Topping>::new()
        .select_named("ham")
        .unwrap()
        .select_named("pineapple")
        .unwrap_err();

    assert!(matches!(&err, Error::InvalidOption { option } if option == "pineapple"));
    assert_eq!(
        err.to_string(),
        "invalid option 'pineapple': not a member of the option set"
    );
}

#[test]
fn selections_compare_by_contents() {
    let a = SelectionBuilder::new()
        .select(Topping::Onion)
        .select(Topping::Ham)
        .build();
    let b = SelectionBuilder::new()
        .select(Topping::Ham)
        .select(Topping::Onion)
        .build();
    assert_eq!(a, b);
}
