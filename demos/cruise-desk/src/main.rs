use std::io::Write;

use cabinet::prelude::*;
use cabinet::{Guest, normalize};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Line-oriented prompt over stdin. `None` means stdin is closed.
struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    async fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?.map(|line| line.trim().to_string()))
    }

    /// Asks a yes/no question; `s` or `si` (any case or accent) is yes.
    async fn confirm(&mut self, prompt: &str) -> std::io::Result<Option<bool>> {
        Ok(self
            .ask(prompt)
            .await?
            .map(|answer| matches!(normalize(&answer).as_str(), "s" | "si")))
    }
}

fn print_menu() {
    println!("\n{}", "=".repeat(40));
    println!(" SISTEMA DE RESERVAS DE CRUCERO");
    println!("{}", "=".repeat(40));
    println!(" 1. Listar habitaciones disponibles");
    println!(" 2. Buscar habitaciones por cubierta/acomodación");
    println!(" 3. Realizar una reserva");
    println!(" 4. Cancelar una reserva");
    println!(" 5. Consultar reserva por código");
    println!(" 6. Listar todas las reservas");
    println!(" 7. Salir");
    println!("{}", "=".repeat(40));
}

fn print_lines(header: &str, empty: &str, lines: &[String]) {
    if lines.is_empty() {
        println!("\n{empty}");
        return;
    }
    println!("\n{header}");
    for line in lines {
        println!("{line}");
    }
}

// ---------------------------------------------------------------------------
// Menu actions
// ---------------------------------------------------------------------------

async fn search_rooms(desk: &FrontDesk, console: &mut Console) -> std::io::Result<()> {
    println!("\nOpciones de cubierta: Económica, Normal, Premium");
    let Some(deck_input) = console
        .ask("Ingrese la cubierta (deje en blanco para todas): ")
        .await?
    else {
        return Ok(());
    };
    let deck = if deck_input.is_empty() {
        None
    } else {
        match deck_input.parse::<Deck>() {
            Ok(deck) => Some(deck),
            Err(_) => {
                println!("Cubierta no válida. Utilizando todas las cubiertas.");
                None
            }
        }
    };

    let Some(capacity_input) = console
        .ask("Ingrese la acomodación (2, 3 o 4 personas, deje en blanco para todas): ")
        .await?
    else {
        return Ok(());
    };
    let capacity = if capacity_input.is_empty() {
        None
    } else {
        match capacity_input.parse::<u8>() {
            Ok(c @ 2..=4) => Some(c),
            Ok(_) => {
                println!("Acomodación no válida. Debe ser 2, 3 o 4.");
                return Ok(());
            }
            Err(_) => {
                println!("Valor inválido para acomodación.");
                return Ok(());
            }
        }
    };

    let lines = desk
        .available_rooms(deck.map(Deck::display_name), capacity)
        .await;
    print_lines(
        "Habitaciones que cumplen con los criterios:",
        "No hay habitaciones que cumplan con los criterios.",
        &lines,
    );
    Ok(())
}

/// Outcome of asking who sleeps in one berth.
enum Berth {
    Guest(GuestCode),
    Vacant,
    /// The clerk gave up on the whole booking.
    Abandon,
    /// Stdin closed mid-booking.
    Eof,
}

async fn fill_berth(
    desk: &FrontDesk,
    console: &mut Console,
    berth: u8,
    capacity: u8,
    taken: &[GuestCode],
) -> std::io::Result<Berth> {
    loop {
        println!("\nRegistro de Usuario {berth}/{capacity}:");
        let Some(register) = console
            .confirm(&format!(
                "¿Desea registrar al usuario {berth}? (S/N, N para dejar vacante): "
            ))
            .await?
        else {
            return Ok(Berth::Eof);
        };
        if !register {
            return Ok(Berth::Vacant);
        }

        let Some(name) = console.ask("Ingrese el nombre del usuario: ").await? else {
            return Ok(Berth::Eof);
        };
        let Some(code_input) = console
            .ask("Ingrese el número de usuario (deje en blanco para asignar automáticamente): ")
            .await?
        else {
            return Ok(Berth::Eof);
        };
        let code = if code_input.is_empty() {
            None
        } else {
            match code_input.parse::<GuestCode>() {
                Ok(code) => Some(code),
                Err(_) => {
                    println!("Número de usuario inválido, se asignará automáticamente.");
                    None
                }
            }
        };

        let existing = match code {
            Some(code) => desk.guest(code).await,
            None => None,
        };
        let guest: Guest = match existing {
            Some(guest) => {
                println!("Usuario existente encontrado: {guest}");
                guest
            }
            None => {
                let guest = desk.register_guest(&name, code).await;
                println!("Nuevo usuario registrado: {guest}");
                guest
            }
        };

        let conflict = match guest.reservation {
            Some(held) => Some(format!("El usuario ya tiene una reserva: {held}")),
            None if taken.contains(&guest.code) => {
                Some("El usuario ya ocupa otra plaza en esta reserva.".to_string())
            }
            None => None,
        };
        let Some(conflict) = conflict else {
            return Ok(Berth::Guest(guest.code));
        };

        println!("{conflict}");
        match console.confirm("¿Desea seleccionar otro usuario? (S/N): ").await? {
            Some(true) => continue,
            Some(false) => {
                println!("Reserva cancelada.");
                return Ok(Berth::Abandon);
            }
            None => return Ok(Berth::Eof),
        }
    }
}

async fn make_reservation(desk: &FrontDesk, console: &mut Console) -> std::io::Result<()> {
    let Some(code) = console
        .ask("\nIngrese el código de la habitación a reservar: ")
        .await?
    else {
        return Ok(());
    };
    let Ok(room_code) = code.parse::<RoomCode>() else {
        println!("Código de habitación inválido.");
        return Ok(());
    };
    let capacity = match desk.room(&room_code).await {
        Some(room) if room.is_available() => room.capacity(),
        _ => {
            println!("Habitación no disponible o no existe.");
            return Ok(());
        }
    };
    println!("\nLa habitación seleccionada tiene capacidad para {capacity} personas.");

    let mut occupants: Vec<Option<GuestCode>> = Vec::with_capacity(usize::from(capacity));
    for berth in 1..=capacity {
        let taken: Vec<GuestCode> = occupants.iter().flatten().copied().collect();
        match fill_berth(desk, console, berth, capacity, &taken).await? {
            Berth::Guest(code) => occupants.push(Some(code)),
            Berth::Vacant => occupants.push(None),
            Berth::Abandon | Berth::Eof => return Ok(()),
        }
    }
    if occupants.iter().all(Option::is_none) {
        println!("No se registró ningún usuario. Reserva cancelada.");
        return Ok(());
    }

    let Some(days_input) = console.ask("\nIngrese la cantidad de días de reserva: ").await? else {
        return Ok(());
    };
    let days = match days_input.parse::<u32>() {
        Ok(0) => {
            println!("La cantidad de días debe ser mayor a 0.");
            return Ok(());
        }
        Ok(days) => days,
        Err(_) => {
            println!("Valor inválido para días de reserva.");
            return Ok(());
        }
    };

    match desk.quote(&room_code, days).await {
        Ok(cost) => println!("\nCosto de la reserva: ${cost}"),
        Err(e) => {
            println!("\nNo se pudo calcular el costo: {e}");
            return Ok(());
        }
    }

    if console.confirm("¿Confirmar reserva? (S/N): ").await? != Some(true) {
        println!("\nReserva cancelada.");
        return Ok(());
    }

    match desk
        .book(BookingRequest::new(room_code, days, occupants))
        .await
    {
        Ok(receipt) => println!(
            "\nReserva realizada con éxito. Código: {}",
            receipt.reservation
        ),
        Err(e) => {
            tracing::debug!(error = %e, "booking rejected");
            println!("\nNo se pudo realizar la reserva: {e}");
        }
    }
    Ok(())
}

async fn cancel_reservation(desk: &FrontDesk, console: &mut Console) -> std::io::Result<()> {
    let Some(input) = console
        .ask("\nIngrese el código del usuario (ejemplo: U001): ")
        .await?
    else {
        return Ok(());
    };
    let Ok(code) = input.parse::<GuestCode>() else {
        println!("Usuario no encontrado.");
        return Ok(());
    };
    let Some(guest) = desk.guest(code).await else {
        println!("Usuario no encontrado.");
        return Ok(());
    };
    let Some(reservation) = guest.reservation else {
        println!("El usuario no tiene reservas activas.");
        return Ok(());
    };

    let prompt = format!("¿Confirmar cancelación de la reserva {reservation}? (S/N): ");
    if console.confirm(&prompt).await? != Some(true) {
        println!("\nCancelación abortada.");
        return Ok(());
    }
    match desk.cancel_for_guest(code).await {
        Ok(_) => println!("\nReserva cancelada con éxito."),
        Err(e) => println!("\nNo se pudo cancelar la reserva: {e}"),
    }
    Ok(())
}

async fn show_reservation(desk: &FrontDesk, console: &mut Console) -> std::io::Result<()> {
    let Some(input) = console
        .ask("\nIngrese el código de la reserva (ejemplo: R001): ")
        .await?
    else {
        return Ok(());
    };
    let detail = match input.parse::<ReservationCode>() {
        Ok(code) => desk.describe(code).await,
        Err(_) => NOT_FOUND_MESSAGE.to_string(),
    };
    println!("\n{detail}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let desk = match std::env::args().nth(1) {
        Some(path) => FrontDesk::from_config_file(path).await?,
        None => FrontDesk::new(),
    };
    let mut console = Console::new();

    loop {
        print_menu();
        let Some(option) = console.ask("Seleccione una opción: ").await? else {
            break;
        };

        match option.as_str() {
            "1" => {
                let lines = desk.available_rooms(None, None).await;
                print_lines(
                    "Habitaciones disponibles:",
                    "No hay habitaciones disponibles.",
                    &lines,
                );
            }
            "2" => search_rooms(&desk, &mut console).await?,
            "3" => make_reservation(&desk, &mut console).await?,
            "4" => cancel_reservation(&desk, &mut console).await?,
            "5" => show_reservation(&desk, &mut console).await?,
            "6" => {
                let lines = desk.reservations().await;
                print_lines("Reservas activas:", "No hay reservas activas.", &lines);
            }
            "7" => {
                println!("\n¡Gracias por usar el sistema de reservas!");
                break;
            }
            _ => println!("\nOpción no válida. Intente de nuevo."),
        }
    }

    Ok(())
}
