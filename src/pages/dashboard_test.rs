use super::*;
use crate::net::types::Role;
use crate::test_support::identity;

#[test]
fn greeting_uses_trimmed_name() {
    let mut user = identity(1, Role::User);
    user.name = "  Ada ".to_owned();
    assert_eq!(greeting(Some(&user)), "Welcome back, Ada");
}

#[test]
fn greeting_without_name_is_generic() {
    let mut user = identity(1, Role::User);
    user.name = "   ".to_owned();
    assert_eq!(greeting(Some(&user)), "Welcome back");
    assert_eq!(greeting(None), "Welcome back");
}

#[test]
fn avatar_initial_uppercases_first_letter() {
    let mut user = identity(1, Role::User);
    user.name = "élodie".to_owned();
    assert_eq!(avatar_initial(Some(&user)), "É");
    assert_eq!(avatar_initial(None), "?");
}
