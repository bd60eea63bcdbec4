use crate::extract_bearer_token;

use googletest::prelude::*;

#[test]
fn given_bearer_prefix_then_token_extracted() {
    assert_that!(extract_bearer_token("Bearer abc.def.ghi"), some(eq("abc.def.ghi")));
}

#[test]
fn given_bare_token_then_used_as_is() {
    assert_that!(extract_bearer_token("abc.def.ghi"), some(eq("abc.def.ghi")));
}

#[test]
fn given_prefix_only_then_none() {
    assert_that!(extract_bearer_token("Bearer "), none());
    assert_that!(extract_bearer_token("   "), none());
    assert_that!(extract_bearer_token(""), none());
}

#[test]
fn given_surrounding_whitespace_then_trimmed() {
    assert_that!(extract_bearer_token("Bearer   tok  "), some(eq("tok")));
}
