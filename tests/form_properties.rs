//! Property-based tests for competitor list editing using proptest.

use proptest::prelude::*;

use competitor_analyzer::{CompetitorList, FormError};

#[derive(Debug, Clone)]
enum Edit {
    Append,
    Update(usize, String),
    Remove(usize),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        Just(Edit::Append),
        (0usize..8, "[a-z.]{0,8}").prop_map(|(i, v)| Edit::Update(i, v)),
        (0usize..8).prop_map(Edit::Remove),
    ]
}

/// Plain vector model of the expected list behaviour
fn apply_model(rows: &mut Vec<String>, edit: &Edit) -> Result<(), FormError> {
    let len = rows.len();
    match edit {
        Edit::Append => rows.push(String::new()),
        Edit::Update(i, v) => match rows.get_mut(*i) {
            Some(row) => *row = v.clone(),
            None => return Err(FormError::IndexOutOfRange { index: *i, len }),
        },
        Edit::Remove(0) => return Err(FormError::AnchorRow),
        Edit::Remove(i) if *i >= len => return Err(FormError::IndexOutOfRange { index: *i, len }),
        Edit::Remove(i) => {
            rows.remove(*i);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn edits_match_vector_model(edits in prop::collection::vec(edit(), 0..40)) {
        let mut list = CompetitorList::new();
        let mut model = vec![String::new()];

        for edit in &edits {
            let actual = match edit {
                Edit::Append => {
                    let index = list.append();
                    prop_assert_eq!(index, model.len());
                    Ok(())
                }
                Edit::Update(i, v) => list.update(*i, v.clone()),
                Edit::Remove(i) => list.remove(*i).map(|_| ()),
            };
            let expected = apply_model(&mut model, edit);

            prop_assert_eq!(actual, expected);
            prop_assert_eq!(list.rows(), model.as_slice());
        }
    }

    #[test]
    fn anchor_row_is_never_removable(
        values in prop::collection::vec("[a-z]{0,6}", 0..10),
    ) {
        let mut list = CompetitorList::from_values(values);
        let before = list.rows().to_vec();

        prop_assert!(!list.can_remove(0));
        prop_assert_eq!(list.remove(0), Err(FormError::AnchorRow));
        prop_assert_eq!(list.rows(), before.as_slice());
    }

    #[test]
    fn removal_keeps_relative_order(
        values in prop::collection::vec("[a-z]{1,6}", 2..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut list = CompetitorList::from_values(values.clone());
        let index = 1 + pick.index(values.len() - 1);

        let removed = list.remove(index).unwrap();

        let mut expected = values.clone();
        prop_assert_eq!(removed, expected.remove(index));
        prop_assert_eq!(list.rows(), expected.as_slice());
    }
}
