use anyhow::Result;

use tilted::{Value, ValueArray};

/// Terminal walkthrough of the value array: appends, prints, removals, and
/// duplicate handling.
fn main() -> Result<()> {
    let mut words = ValueArray::strings(128);
    words.push("these")?;
    words.push("are")?;
    words.push("some")?;
    words.push("bounded")?;
    words.push("strings")?;

    println!("words {words:#}");

    let mut numbers = ValueArray::ints();
    for i in 0..5 {
        numbers.push(i * i + 1)?;
    }

    println!("numbers {numbers:#}");

    if let Some(removed) = words.remove_value(&Value::from("bounded")) {
        println!("Removed {removed} from words, putting in 'longer'!");
    }
    words.push("longer")?;

    println!("{words}");

    if let Some(last) = numbers.pop() {
        println!("Removed the last number from numbers ({last})!");
    }

    println!("{numbers}");

    // Duplicate the first two numbers, then collapse the array to a set.
    let mut head = ValueArray::ints();
    for idx in 0..2 {
        if let Some(value) = numbers.get(idx) {
            head.push(value.clone())?;
        }
    }
    numbers.concat(&head)?;
    println!("{numbers}");

    numbers.dedup();
    println!("{numbers}");

    Ok(())
}
