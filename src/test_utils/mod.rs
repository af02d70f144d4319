#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{
    assert_failure, assert_success, get_test_server, get_test_server_with_budget,
};
