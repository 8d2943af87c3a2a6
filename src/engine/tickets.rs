//! Face Value Ticket (FVT) allowance
//!
//! Tickets are a right to buy below-market goods, so the allowance is
//! hard-capped: an unbounded count would undermine the scarcity the reward
//! system exists to create. Two acquisition paths feed it - point
//! conversion at a fixed rate, and direct grant - and both reject (rather
//! than clamp) when the cap would be exceeded, so every violation is
//! observable to the caller.

use super::EngineError;

/// Maximum tickets a profile may hold
pub const TICKET_CAP: u8 = 5;

/// Points consumed to mint one ticket
pub const CONVERSION_COST: u64 = 10_000;

/// Convert points into one ticket at the fixed rate.
///
/// Requires a free ticket slot and at least [`CONVERSION_COST`] points;
/// returns the new (points, tickets) pair.
pub fn convert(points: u64, tickets: u8) -> Result<(u64, u8), EngineError> {
    if tickets >= TICKET_CAP {
        return Err(EngineError::TicketCapReached { cap: TICKET_CAP });
    }
    if points < CONVERSION_COST {
        return Err(EngineError::InsufficientPoints {
            needed: CONVERSION_COST,
            available: points,
        });
    }
    Ok((points - CONVERSION_COST, tickets + 1))
}

/// Grant `amount` tickets directly (the purchase path; payment itself is
/// handled outside the engine).
pub fn grant(tickets: u8, amount: u8) -> Result<u8, EngineError> {
    let held = tickets
        .checked_add(amount)
        .ok_or(EngineError::TicketCapExceeded {
            amount,
            cap: TICKET_CAP,
        })?;
    if held > TICKET_CAP {
        return Err(EngineError::TicketCapExceeded {
            amount,
            cap: TICKET_CAP,
        });
    }
    Ok(held)
}
