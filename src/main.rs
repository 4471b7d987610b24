// Front-desk console - interactive menu over the Hotel library
//
// Thin shell: prompts, parses, prints. All bookkeeping lives in the
// library; every domain error is reported and the loop continues.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use uuid::Uuid;

use hotel_front_desk::{Hotel, RoomListing};

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut hotel = Hotel::new();

    println!("🏨 Welcome to the Front Desk (v{})", hotel_front_desk::VERSION);

    loop {
        print_menu();
        let choice = match read_line(&mut lines, "> ")? {
            Some(line) => line,
            None => break, // stdin closed
        };

        match choice.trim() {
            "1" => {
                if let Err(err) = make_reservation(&mut hotel, &mut lines) {
                    eprintln!("✗ {err}");
                }
            }
            "2" => {
                if let Err(err) = view_reservation(&hotel, &mut lines) {
                    eprintln!("✗ {err}");
                }
            }
            "3" => {
                if let Err(err) = cancel_reservation(&mut hotel, &mut lines) {
                    eprintln!("✗ {err}");
                }
            }
            "4" => {
                let snapshot = hotel.snapshot();
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            "5" => break,
            other => eprintln!("✗ Invalid selection: {other}"),
        }
        println!();
    }

    println!("Goodbye.");
    Ok(())
}

fn print_menu() {
    println!("1. Make a reservation");
    println!("2. View a reservation");
    println!("3. Cancel a reservation");
    println!("4. House status");
    println!("5. Exit");
}

fn print_room_list(rooms: &[RoomListing]) {
    println!("Rooms:");
    for (i, room) in rooms.iter().enumerate() {
        println!(
            "  {}. {} - price: {} ({} of {} available)",
            i + 1,
            room.tier,
            room.price,
            room.available_units,
            room.total_units
        );
    }
}

fn make_reservation<I>(hotel: &mut Hotel, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    print_room_list(&hotel.list_rooms());

    let selection = prompt(lines, "Select a room number: ")?;
    let room_number: usize = selection
        .trim()
        .parse()
        .with_context(|| format!("Not a room number: {selection}"))?;
    // Menu is 1-based, the inventory is 0-based; 0 would underflow
    let room_index = room_number
        .checked_sub(1)
        .with_context(|| format!("Not a room number: {selection}"))?;

    let name = prompt(lines, "Guest name: ")?;
    let phone = prompt(lines, "Guest phone (XXX-XXXX-XXXX): ")?;

    let budget_input = prompt(lines, "Guest budget: ")?;
    let budget: i64 = budget_input
        .trim()
        .parse()
        .with_context(|| format!("Not an amount: {budget_input}"))?;

    let date = prompt(
        lines,
        "Reservation date (ISO 8601, e.g. 2016-10-27T17:13:40+00:00): ",
    )?;

    let id = hotel.reserve(room_index, name.trim(), phone.trim(), budget, date.trim())?;
    println!("✓ Reservation confirmed. Reservation id: {id}");
    Ok(())
}

fn view_reservation<I>(hotel: &Hotel, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let id = prompt_reservation_id(lines)?;
    let view = hotel.find_reservation(id)?;

    println!("✓ Reservation found.");
    println!("  Guest:  {} ({})", view.customer_name, view.customer_phone);
    println!("  Room:   {} - price: {}", view.room_tier, view.price);
    println!("  Date:   {}", view.date);
    Ok(())
}

fn cancel_reservation<I>(hotel: &mut Hotel, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let id = prompt_reservation_id(lines)?;
    let receipt = hotel.cancel(id)?;

    println!(
        "✓ Reservation {} cancelled. {} refunded for the {}.",
        receipt.reservation_id, receipt.refund, receipt.room_tier
    );
    Ok(())
}

fn prompt_reservation_id<I>(lines: &mut I) -> Result<Uuid>
where
    I: Iterator<Item = io::Result<String>>,
{
    let input = prompt(lines, "Reservation id: ")?;
    Uuid::parse_str(input.trim()).with_context(|| format!("Not a reservation id: {input}"))
}

fn prompt<I>(lines: &mut I, label: &str) -> Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    read_line(lines, label)?.context("Input closed")
}

fn read_line<I>(lines: &mut I, label: &str) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
