//! Cart behaviour through the public reducer and the session.

use petfinder::domain::{catalog, Product};
use petfinder::session::Session;
use petfinder::ui::cart::{CartIntent, CartReducer, CartState};
use petfinder::ui::mvi::Reducer;
use proptest::prelude::*;

fn product(id: &str, price: u64) -> Product {
    Product::new(id, id, price, "")
}

#[test]
fn two_x_and_one_y() {
    let mut session = Session::new(None);
    session.add_to_cart(product("x", 100));
    session.add_to_cart(product("x", 100));
    session.add_to_cart(product("y", 50));

    assert_eq!(session.cart().total_items(), 3);
    assert_eq!(session.cart().total_price(), 250);
    assert_eq!(session.cart().quantity_of("x"), 2);
    assert_eq!(session.cart().quantity_of("y"), 1);
}

#[test]
fn lines_are_ordered_by_product_id() {
    let mut session = Session::new(None);
    let products = catalog();
    session.add_to_cart(products[2].clone());
    session.add_to_cart(products[0].clone());

    let ids: Vec<_> = session.cart().lines().map(|l| l.product.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn clear_via_session() {
    let mut session = Session::new(None);
    session.add_to_cart(catalog()[0].clone());
    session.clear_cart();
    assert!(session.cart().is_empty());
}

fn ids() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..6, 0..40)
}

proptest! {
    #[test]
    fn total_items_counts_every_add(picks in ids()) {
        let products = catalog();
        let state = picks.iter().fold(CartState::default(), |state, i| {
            CartReducer::reduce(state, CartIntent::Add { product: products[*i].clone() })
        });

        prop_assert_eq!(state.total_items(), picks.len() as u64);
        for (i, p) in products.iter().enumerate() {
            let expected = picks.iter().filter(|pick| **pick == i).count() as u32;
            prop_assert_eq!(state.quantity_of(&p.id), expected);
        }
        let expected_price: u64 = picks.iter().map(|i| products[*i].price).sum();
        prop_assert_eq!(state.total_price(), expected_price);
    }

    #[test]
    fn clear_always_empties(picks in ids()) {
        let products = catalog();
        let state = picks.iter().fold(CartState::default(), |state, i| {
            CartReducer::reduce(state, CartIntent::Add { product: products[*i].clone() })
        });
        let state = CartReducer::reduce(state, CartIntent::Clear);
        prop_assert_eq!(state.total_items(), 0);
    }
}
