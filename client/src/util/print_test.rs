#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn print_page_is_noop_but_callable() {
    print_page();
}
