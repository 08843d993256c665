//! Basic example of using the MineSeeker engine.

use mineseeker_core::{Generator, SafeFieldOracle, Seeker};

fn main() {
    println!("Generating a 30x16 field with 40 mines...\n");
    let mut generator = Generator::with_seed(42);
    let minefield = generator.generate(30, 16, 40);

    println!("Mine counts:");
    println!("{minefield}");

    let mut seeker = Seeker::new(&minefield);
    let mut hints = SafeFieldOracle;
    let solved = seeker.solve(&mut hints);

    println!("Final board:");
    println!("{seeker}");
    println!("Solved: {solved}");
    println!("Safe-field requests: {}", seeker.safe_field_requests());
}
