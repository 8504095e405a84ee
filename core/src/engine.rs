use log::{trace, warn};
use rand::Rng;

use crate::constants::INSTRUCTION_WIDTH;
use crate::decoder::{decode, OpcodeId};
use crate::error::Result;
use crate::operations::*;
use crate::state::MachineState;

/// What a single call to `step` did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Executed(OpcodeId),
    /// Nothing ran; an Fx0A is still waiting on a keypress
    AwaitingKey,
}

/// Runs the operation for a decoded opcode against `state`
pub fn execute<R: Rng + ?Sized>(
    id: OpcodeId,
    op: u16,
    state: &mut MachineState,
    rng: &mut R,
) -> Result<()> {
    match id {
        OpcodeId::Clear => clr(op, state),
        OpcodeId::Return => rts(op, state),
        OpcodeId::Jump => jump(op, state),
        OpcodeId::Call => call(op, state),
        OpcodeId::SkipEqImm => ske(op, state),
        OpcodeId::SkipNeImm => skne(op, state),
        OpcodeId::SkipEqReg => skre(op, state),
        OpcodeId::LoadImm => load(op, state),
        OpcodeId::AddImm => add(op, state),
        OpcodeId::Move => mv(op, state),
        OpcodeId::Or => or(op, state),
        OpcodeId::And => and(op, state),
        OpcodeId::Xor => xor(op, state),
        OpcodeId::AddReg => addr(op, state),
        OpcodeId::Sub => sub(op, state),
        OpcodeId::ShiftRight => shr(op, state),
        OpcodeId::SubReverse => subn(op, state),
        OpcodeId::ShiftLeft => shl(op, state),
        OpcodeId::SkipNeReg => skrne(op, state),
        OpcodeId::LoadIndex => loadi(op, state),
        OpcodeId::JumpOffset => jumpi(op, state),
        OpcodeId::Random => rand(op, state, rng.gen()),
        OpcodeId::Draw => draw(op, state),
        OpcodeId::SkipKeyEq => skpr(op, state),
        OpcodeId::SkipKeyNe => skup(op, state),
        OpcodeId::LoadDelay => moved(op, state),
        OpcodeId::WaitKey => keyd(op, state),
        OpcodeId::SetDelay => loads(op, state),
        OpcodeId::SetSound => ld(op, state),
        OpcodeId::AddIndex => addi(op, state),
        OpcodeId::LoadGlyph => ldspr(op, state),
        OpcodeId::StoreBcd => bcd(op, state),
        OpcodeId::StoreRegisters => stor(op, state),
        OpcodeId::LoadRegisters => read(op, state),
    }
}

/// Fetches, decodes and executes the instruction at the program counter.
/// - doesn't fetch anything while a register is waiting on a keypress
/// - bumps the PC by one instruction unless the operation set it itself
///
/// The operation runs against a copy of the state which is only committed once everything
/// has succeeded, so an error leaves `state` exactly as it was.
pub fn step<R: Rng + ?Sized>(state: &mut MachineState, rng: &mut R) -> Result<Step> {
    if state.register_needing_key().is_some() {
        return Ok(Step::AwaitingKey);
    }

    let pc = state.pc();
    let op = state.read_word(pc as usize)?;
    let id = decode(op).map_err(|e| {
        warn!("{} at {:#05X}", e, pc);
        e
    })?;
    trace!(
        "{:04X} {:?} v{:02X?} i{:04X} pc{:04X}",
        op,
        id,
        state.registers(),
        state.index(),
        pc
    );

    let mut next = *state;
    execute(id, op, &mut next, rng)?;
    if !id.sets_pc() {
        next.advance_pc(INSTRUCTION_WIDTH)?;
    }
    *state = next;
    Ok(Step::Executed(id))
}
