// ============================================================================
// Basic Usage Example
// ============================================================================

use checkout_money::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=debug shows why operations are rejected
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Checkout Money Example ===\n");

    let cart = [
        ("Vintage typewriter", Money::new(67, 990_000_000, "USD"), 1u32),
        ("Film camera", Money::new(2_245, 0, "USD"), 2),
        ("Bamboo glass jar", Money::new(5, 490_000_000, "USD"), 4),
    ];

    let mut subtotal = Money::zero("USD");
    for (name, price, quantity) in cart.iter() {
        let line = must(price.multiply_slow(*quantity));
        println!("{:<20} x{} = {:?}", name, quantity, line);
        subtotal = must(subtotal.sum(&line));
    }
    println!("\nSubtotal: {:?}", subtotal);

    let shipping = Money::new(8, 990_000_000, "USD");
    let total = &subtotal + &shipping;
    println!("Total with shipping: {:?}", total);

    if let Ok(amount) = total.to_decimal() {
        println!("As decimal: {} {}", amount, total.currency_code);
    }

    println!("\nRefund: {:?}", -&total);

    // Failures are returned, not panicked
    let euros = Money::new(10, 0, "EUR");
    match total.sum(&euros) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("USD + EUR: {}", err),
    }

    let broken = Money::new(1, -500_000_000, "USD");
    println!("{:?} valid: {}", broken, broken.is_valid());
    if let Err(err) = broken.negate() {
        println!("negate: {}", err);
    }

    let untyped = Money::new(1, 0, "");
    println!(
        "two uncoded amounts: same currency = {}, summable = {}",
        untyped.are_same_currency(&untyped),
        untyped.sum(&untyped).is_ok()
    );

    println!("\n=== Example Complete ===");
}
