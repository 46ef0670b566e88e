//! Persistent list walkthrough.
//!
//! Builds a few sample lists and runs every operation once, printing one
//! `<description> = <result>` line per call.
//!
//! Run with: cargo run --bin lists_demo

use fp_common::{plist, PersistentList};
use fp_lists::{data_sharing, folds, pattern_matching};

fn main() {
    println!("=== Persistent Lists ===\n");

    let numbers = plist![1, 2, 3, 4];
    let factors = plist![1.0, 2.0, 3.0, 4.0];
    let letters = plist!["a", "b", "c"];

    // ------------------------------------------------------------------
    // Recursion over shapes
    // ------------------------------------------------------------------
    println!("sum([{numbers}]) = {}", pattern_matching::sum(&numbers));
    println!(
        "product([{factors}]) = {}",
        pattern_matching::product(&factors)
    );
    println!(
        "product([5.0, 0.0, 7.0]) = {}",
        pattern_matching::product(&plist![5.0, 0.0, 7.0])
    );
    println!("classify([{numbers}]) = {}", pattern_matching::classify(&numbers));
    println!("length([{numbers}]) = {}", numbers.len());

    // ------------------------------------------------------------------
    // Data sharing
    // ------------------------------------------------------------------
    println!("\n=== Data Sharing ===\n");
    println!("tail([{numbers}]) = {}", numbers.tail());
    println!("setHead([{numbers}], 9) = {}", numbers.set_head(9));
    println!("drop([{numbers}], 2) = {}", numbers.drop_first(2));
    println!(
        "dropWhile([{numbers}], x < 3) = {}",
        numbers.drop_while(|&x| x < 3)
    );
    println!("init([{numbers}]) = {}", numbers.init());
    println!(
        "initRecursive([{numbers}]) = {}",
        data_sharing::init_recursive(&numbers)
    );

    // ------------------------------------------------------------------
    // Folds and friends
    // ------------------------------------------------------------------
    println!("\n=== Folds ===\n");
    println!(
        "foldLeft([{letters}], \"\", concat) = {}",
        letters.fold_left(String::new(), |acc, s| acc + s)
    );
    println!(
        "foldRight([{letters}], \"\", concat) = {}",
        letters.fold_right(String::new(), |s, acc| acc + s)
    );
    println!(
        "foldRight([{numbers}], [], cons) = {}",
        numbers.fold_right(PersistentList::new(), |&x, acc| acc.cons(x))
    );
    println!("sumViaFold([{numbers}]) = {}", folds::sum_via_fold(&numbers));
    println!(
        "lengthViaFold([{numbers}]) = {}",
        folds::length_via_fold(&numbers)
    );
    println!("reverse([{numbers}]) = {}", numbers.reverse());

    let left = plist![1, 2];
    let right = plist![3, 4];
    println!("append([{left}], [{right}]) = {}", left.append(&right));

    let nested = plist![plist![1, 2, 3], plist![4, 5, 6], plist![7, 8, 9]];
    println!("concat([[1, 2, 3], [4, 5, 6], [7, 8, 9]]) = {}", nested.concat());

    println!("map([{numbers}], x * x) = {}", numbers.map(|x| x * x));
    println!("stringify([{numbers}]) = {numbers}");
}
