use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG_REGISTER, GLYPH_SIZE, INSTRUCTION_WIDTH,
};
use crate::error::Result;
use crate::opcode::Opcode;
use crate::state::MachineState;

// Every operation reads what it needs and checks every address before it writes anything.
// The engine bumps the PC afterwards unless the operation is one that sets it.

/// clear
pub fn clr(_op: u16, state: &mut MachineState) -> Result<()> {
    state.frame_buffer_mut().clear();
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: u16, state: &mut MachineState) -> Result<()> {
    let addr = state.pop_return()?;
    state.set_pc(addr)
}

/// PC = addr
pub fn jump(op: u16, state: &mut MachineState) -> Result<()> {
    state.set_pc(op.nnn())
}

/// STACK.push(PC + 2); PC = addr
pub fn call(op: u16, state: &mut MachineState) -> Result<()> {
    let ret = state.pc() + INSTRUCTION_WIDTH;
    state.push_return(ret)?;
    state.set_pc(op.nnn())
}

/// if Vx == nn then pc += 2
pub fn ske(op: u16, state: &mut MachineState) -> Result<()> {
    let vx = state.register(op.x())?;
    skip_if(state, vx == op.nn())
}

/// if Vx != nn then pc += 2
pub fn skne(op: u16, state: &mut MachineState) -> Result<()> {
    let vx = state.register(op.x())?;
    skip_if(state, vx != op.nn())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: u16, state: &mut MachineState) -> Result<()> {
    let (vx, vy) = operands(op, state)?;
    skip_if(state, vx == vy)
}

/// Vx = nn
pub fn load(op: u16, state: &mut MachineState) -> Result<()> {
    state.set_register(op.x(), op.nn())
}

/// Vx += nn
/// Add nn to Vx; allow for overflow but drop it without touching VF
pub fn add(op: u16, state: &mut MachineState) -> Result<()> {
    let vx = state.register(op.x())?;
    state.set_register(op.x(), vx.wrapping_add(op.nn()))
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut MachineState) -> Result<()> {
    let vy = state.register(op.y())?;
    state.set_register(op.x(), vy)
}

/// Vx |= Vy
pub fn or(op: u16, state: &mut MachineState) -> Result<()> {
    let (vx, vy) = operands(op, state)?;
    state.set_register(op.x(), vx | vy)
}

/// Vx &= Vy
pub fn and(op: u16, state: &mut MachineState) -> Result<()> {
    let (vx, vy) = operands(op, state)?;
    state.set_register(op.x(), vx & vy)
}

/// Vx ^= Vy
pub fn xor(op: u16, state: &mut MachineState) -> Result<()> {
    let (vx, vy) = operands(op, state)?;
    state.set_register(op.x(), vx ^ vy)
}

/// Vx += Vy; VF = overflow
pub fn addr(op: u16, state: &mut MachineState) -> Result<()> {
    let (vx, vy) = operands(op, state)?;
    let (res, over) = vx.overflowing_add(vy);
    write_with_flag(state, op.x(), res, over)
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: u16, state: &mut MachineState) -> Result<()> {
    let (vx, vy) = operands(op, state)?;
    let (res, under) = vx.overflowing_sub(vy);
    write_with_flag(state, op.x(), res, !under)
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(op: u16, state: &mut MachineState) -> Result<()> {
    let vx = state.register(op.x())?;
    write_with_flag(state, op.x(), vx >> 1, vx & 0x1 == 0x1)
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: u16, state: &mut MachineState) -> Result<()> {
    let (vx, vy) = operands(op, state)?;
    let (res, under) = vy.overflowing_sub(vx);
    write_with_flag(state, op.x(), res, !under)
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(op: u16, state: &mut MachineState) -> Result<()> {
    let vx = state.register(op.x())?;
    write_with_flag(state, op.x(), vx << 1, (vx >> 7) & 0x1 == 0x1)
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: u16, state: &mut MachineState) -> Result<()> {
    let (vx, vy) = operands(op, state)?;
    skip_if(state, vx != vy)
}

/// I = addr
pub fn loadi(op: u16, state: &mut MachineState) -> Result<()> {
    state.set_index(op.nnn());
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(op: u16, state: &mut MachineState) -> Result<()> {
    let v0 = state.register(0x0)?;
    state.set_pc(u16::from(v0) + op.nnn())
}

/// Vx = random_byte & nn
pub fn rand(op: u16, state: &mut MachineState, random_byte: u8) -> Result<()> {
    state.set_register(op.x(), random_byte & op.nn())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position (Vx % 64, Vy % 32) on the FrameBuffer.
/// Rows and columns that run off the screen are clipped, not wrapped.
/// Sets VF if any pixels are erased.
pub fn draw(op: u16, state: &mut MachineState) -> Result<()> {
    let (vx, vy) = operands(op, state)?;
    let x = vx as usize % DISPLAY_WIDTH;
    let y = vy as usize % DISPLAY_HEIGHT;

    let mut sprite = [0u8; 0xF];
    let height = op.n() as usize;
    sprite[..height].copy_from_slice(state.memory().slice(state.index() as usize, height)?);

    let frame_buffer = state.frame_buffer_mut();
    let mut collision = false;
    for (row, byte) in sprite[..height].iter().enumerate() {
        if y + row >= DISPLAY_HEIGHT {
            break;
        }
        collision |= frame_buffer.xor_byte(x, y + row, *byte);
    }

    state.set_flag(collision);
    Ok(())
}

/// if key == Vx then pc += 2
pub fn skpr(op: u16, state: &mut MachineState) -> Result<()> {
    let pressed = state.key() == Some(state.register(op.x())?);
    skip_if(state, pressed)
}

/// if key != Vx then pc += 2
pub fn skup(op: u16, state: &mut MachineState) -> Result<()> {
    let released = state.key() != Some(state.register(op.x())?);
    skip_if(state, released)
}

/// Vx = DT
pub fn moved(op: u16, state: &mut MachineState) -> Result<()> {
    let dt = state.delay_timer();
    state.set_register(op.x(), dt)
}

/// await keypress for Vx
pub fn keyd(op: u16, state: &mut MachineState) -> Result<()> {
    state.await_key(op.x())
}

/// DT = Vx
pub fn loads(op: u16, state: &mut MachineState) -> Result<()> {
    let vx = state.register(op.x())?;
    state.set_delay_timer(vx);
    Ok(())
}

/// ST = Vx
pub fn ld(op: u16, state: &mut MachineState) -> Result<()> {
    let vx = state.register(op.x())?;
    state.set_sound_timer(vx);
    Ok(())
}

/// I += Vx
pub fn addi(op: u16, state: &mut MachineState) -> Result<()> {
    let vx = state.register(op.x())?;
    let i = state.index().wrapping_add(u16::from(vx));
    state.set_index(i);
    Ok(())
}

/// I = Vx * 5
/// Set I to the memory address of the glyph for the hex digit in Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: u16, state: &mut MachineState) -> Result<()> {
    let vx = state.register(op.x())?;
    state.set_index(u16::from(vx & 0xF) * GLYPH_SIZE);
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address I
pub fn bcd(op: u16, state: &mut MachineState) -> Result<()> {
    let vx = state.register(op.x())?;
    let digits = [vx / 100 % 10, vx / 10 % 10, vx % 10];
    let i = state.index() as usize;
    state.memory_mut().write(i, &digits)
}

/// mem[I..=I+x] = V0..=Vx
/// I is left where it was
pub fn stor(op: u16, state: &mut MachineState) -> Result<()> {
    let count = op.x() as usize + 1;
    let registers = *state.registers();
    let i = state.index() as usize;
    state.memory_mut().write(i, &registers[..count])
}

/// V0..=Vx = mem[I..=I+x]
/// I is left where it was
pub fn read(op: u16, state: &mut MachineState) -> Result<()> {
    let count = op.x() as usize + 1;
    let mut values = [0u8; 0x10];
    values[..count].copy_from_slice(state.memory().slice(state.index() as usize, count)?);
    for (r, value) in values[..count].iter().enumerate() {
        state.set_register(r as u8, *value)?;
    }
    Ok(())
}

fn operands(op: u16, state: &MachineState) -> Result<(u8, u8)> {
    Ok((state.register(op.x())?, state.register(op.y())?))
}

fn skip_if(state: &mut MachineState, condition: bool) -> Result<()> {
    if condition {
        state.advance_pc(INSTRUCTION_WIDTH)?;
    }
    Ok(())
}

/// Both values come from the operands as they were before the write;
/// the flag goes last so it survives when x is VF.
fn write_with_flag(state: &mut MachineState, x: u8, value: u8, flag: bool) -> Result<()> {
    state.set_register(x, value)?;
    state.set_register(FLAG_REGISTER, u8::from(flag))
}

#[cfg(test)]
mod test_operations {
    use super::*;
    use crate::frame_buffer::Pixel;

    fn state_with(registers: &[(u8, u8)]) -> MachineState {
        let mut state = MachineState::new();
        for (r, value) in registers {
            state.set_register(*r, *value).unwrap();
        }
        state
    }

    fn v(state: &MachineState, r: u8) -> u8 {
        state.register(r).unwrap()
    }

    #[test]
    fn test_00e0_cls() {
        let mut state = MachineState::new();
        state.frame_buffer_mut().xor_byte(0, 0, 0xFF);
        clr(0x00E0, &mut state).unwrap();
        assert_eq!(state.frame_buffer().get(0, 0), Some(Pixel::Off));
    }

    #[test]
    fn test_00ee_ret() {
        let mut state = MachineState::new();
        state.push_return(0x0ABC).unwrap();
        rts(0x00EE, &mut state).unwrap();
        assert_eq!(state.sp(), 0x0);
        assert_eq!(state.pc(), 0x0ABC);
    }

    #[test]
    fn test_1nnn_jp() {
        let mut state = MachineState::new();
        jump(0x1ABC, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0ABC);
    }

    #[test]
    fn test_2nnn_call() {
        let mut state = MachineState::new();
        call(0x2123, &mut state).unwrap();
        assert_eq!(state.sp(), 0x1);
        assert_eq!(state.pc(), 0x0123);
        assert_eq!(state.pop_return().unwrap(), 0x0202);
    }

    #[test]
    fn test_3xnn_se_skips() {
        let mut state = state_with(&[(0x1, 0x11)]);
        ske(0x3111, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0202);
    }

    #[test]
    fn test_3xnn_se_doesntskip() {
        let mut state = MachineState::new();
        ske(0x3111, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0200);
    }

    #[test]
    fn test_4xnn_sne_skips() {
        let mut state = MachineState::new();
        skne(0x4111, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0202);
    }

    #[test]
    fn test_4xnn_sne_doesntskip() {
        let mut state = state_with(&[(0x1, 0x11)]);
        skne(0x4111, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0200);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut state = state_with(&[(0x1, 0x11), (0x2, 0x11)]);
        skre(0x5120, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0202);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut state = state_with(&[(0x1, 0x11)]);
        skre(0x5120, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0200);
    }

    #[test]
    fn test_6xnn_ld() {
        let mut state = MachineState::new();
        load(0x6122, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x22);
    }

    #[test]
    fn test_7xnn_add() {
        let mut state = state_with(&[(0x1, 0x1)]);
        add(0x7122, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x23);
    }

    #[test]
    fn test_7xnn_add_wraps_without_flag() {
        let mut state = state_with(&[(0x1, 0xFF), (0xF, 0x7)]);
        add(0x7102, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x01);
        assert_eq!(v(&state, 0xF), 0x7);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut state = state_with(&[(0x2, 0x1)]);
        mv(0x8120, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut state = state_with(&[(0x1, 0x6), (0x2, 0x3)]);
        or(0x8121, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x7);
    }

    #[test]
    fn test_8xy2_and() {
        let mut state = state_with(&[(0x1, 0x6), (0x2, 0x3)]);
        and(0x8122, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x2);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut state = state_with(&[(0x1, 0x6), (0x2, 0x3)]);
        xor(0x8123, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x5);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut state = state_with(&[(0x1, 0x10), (0x2, 0x20)]);
        addr(0x8124, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x30);
        assert_eq!(v(&state, 0xF), 0x0);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut state = state_with(&[(0x1, 0xF0), (0x2, 0x20)]);
        addr(0x8124, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x10);
        assert_eq!(v(&state, 0xF), 0x1);
    }

    #[test]
    fn test_8xy4_add_into_vf_keeps_flag() {
        let mut state = state_with(&[(0xF, 0xFF), (0x2, 0x02)]);
        addr(0x8F24, &mut state).unwrap();
        assert_eq!(v(&state, 0xF), 0x1);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut state = state_with(&[(0x1, 0x10), (0x2, 0x05)]);
        sub(0x8125, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x0B);
        assert_eq!(v(&state, 0xF), 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut state = state_with(&[(0x1, 0x05), (0x2, 0x10)]);
        sub(0x8125, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0xF5);
        assert_eq!(v(&state, 0xF), 0x0);
    }

    #[test]
    fn test_8xy5_sub_equal_is_no_borrow() {
        let mut state = state_with(&[(0x1, 0x42), (0x2, 0x42)]);
        sub(0x8125, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x0);
        assert_eq!(v(&state, 0xF), 0x1);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut state = state_with(&[(0x1, 0x5)]);
        shr(0x8106, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x2);
        assert_eq!(v(&state, 0xF), 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut state = state_with(&[(0x1, 0x4)]);
        shr(0x8106, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x2);
        assert_eq!(v(&state, 0xF), 0x0);
    }

    #[test]
    fn test_8xy6_shr_vf_itself() {
        let mut state = state_with(&[(0xF, 0x3)]);
        shr(0x8FF6, &mut state).unwrap();
        assert_eq!(v(&state, 0xF), 0x1);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut state = state_with(&[(0x1, 0x11), (0x2, 0x33)]);
        subn(0x8127, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x22);
        assert_eq!(v(&state, 0xF), 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut state = state_with(&[(0x1, 0x12), (0x2, 0x11)]);
        subn(0x8127, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0xFF);
        assert_eq!(v(&state, 0xF), 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut state = state_with(&[(0x1, 0xFF)]);
        shl(0x810E, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0xFE);
        assert_eq!(v(&state, 0xF), 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut state = state_with(&[(0x1, 0x4)]);
        shl(0x810E, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0x8);
        assert_eq!(v(&state, 0xF), 0x0);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut state = state_with(&[(0x1, 0x11)]);
        skrne(0x9120, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0202);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut state = state_with(&[(0x1, 0x11), (0x2, 0x11)]);
        skrne(0x9120, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0200);
    }

    #[test]
    fn test_annn_ld() {
        let mut state = MachineState::new();
        loadi(0xAABC, &mut state).unwrap();
        assert_eq!(state.index(), 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut state = state_with(&[(0x0, 0x2)]);
        jumpi(0xBABC, &mut state).unwrap();
        assert_eq!(state.pc(), 0xABE);
    }

    #[test]
    fn test_bnnn_jp_out_of_bounds() {
        let mut state = state_with(&[(0x0, 0xFF)]);
        assert!(jumpi(0xBFFF, &mut state).is_err());
        assert_eq!(state.pc(), 0x200);
    }

    #[test]
    fn test_cxnn_rand_masks() {
        let mut state = MachineState::new();
        rand(0xC10F, &mut state, 0xAB).unwrap();
        assert_eq!(v(&state, 0x1), 0x0B);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut state = state_with(&[(0x0, 0x1)]);
        // Draw the 0x0 glyph with a 1x 1y offset
        draw(0xD005, &mut state).unwrap();
        let expected: [[u8; 6]; 7] = [
            [0, 0, 0, 0, 0, 0],
            [0, 1, 1, 1, 1, 0],
            [0, 1, 0, 0, 1, 0],
            [0, 1, 0, 0, 1, 0],
            [0, 1, 0, 0, 1, 0],
            [0, 1, 1, 1, 1, 0],
            [0, 0, 0, 0, 0, 0],
        ];
        for (y, row) in expected.iter().enumerate() {
            for (x, lit) in row.iter().enumerate() {
                assert_eq!(state.frame_buffer().get(x, y).unwrap().is_on(), *lit == 1);
            }
        }
        assert_eq!(v(&state, 0xF), 0x0);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut state = MachineState::new();
        state.frame_buffer_mut().xor_byte(0, 0, 0x80);
        draw(0xD001, &mut state).unwrap();
        assert_eq!(v(&state, 0xF), 0x1)
    }

    #[test]
    fn test_dxyn_drw_xors() {
        let mut state = MachineState::new();
        // 0 1 0 1 -> Set
        state.frame_buffer_mut().xor_byte(2, 0, 0b0101_0000);
        // 1 1 1 1 -> Draw xor, the top row of the 0 glyph starting at x = 2
        state.set_register(0x1, 0x2).unwrap();
        draw(0xD101, &mut state).unwrap();
        let row: Vec<bool> = (2..6)
            .map(|x| state.frame_buffer().get(x, 0).unwrap().is_on())
            .collect();
        assert_eq!(row, vec![true, false, true, false]);
    }

    #[test]
    fn test_dxyn_drw_twice_restores_frame() {
        let mut state = MachineState::new();
        state.write_byte(0x300, 0xFF).unwrap();
        state.set_index(0x300);
        draw(0xD001, &mut state).unwrap();
        assert_eq!(v(&state, 0xF), 0x0);
        draw(0xD001, &mut state).unwrap();
        assert_eq!(v(&state, 0xF), 0x1);
        assert_eq!(state.frame_buffer(), MachineState::new().frame_buffer());
    }

    #[test]
    fn test_dxyn_drw_wraps_start_coordinates() {
        let mut state = state_with(&[(0x0, 64 + 3), (0x1, 32 + 4)]);
        draw(0xD011, &mut state).unwrap();
        assert!(state.frame_buffer().get(3, 4).unwrap().is_on());
    }

    #[test]
    fn test_dxyn_drw_clips_bottom_edge() {
        let mut state = state_with(&[(0x1, 30)]);
        draw(0xD015, &mut state).unwrap();
        assert!(state.frame_buffer().get(0, 30).unwrap().is_on());
        assert!(state.frame_buffer().get(0, 31).unwrap().is_on());
        assert!(!state.frame_buffer().get(0, 0).unwrap().is_on());
        assert!(!state.frame_buffer().get(0, 1).unwrap().is_on());
    }

    #[test]
    fn test_dxyn_drw_sprite_out_of_bounds() {
        let mut state = state_with(&[(0xF, 0x7)]);
        state.set_index(0xFFE);
        assert!(draw(0xD003, &mut state).is_err());
        assert_eq!(v(&state, 0xF), 0x7);
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut state = state_with(&[(0x1, 0xE)]);
        state.set_key(0xE).unwrap();
        skpr(0xE19E, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0202);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut state = MachineState::new();
        skpr(0xE19E, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0200);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut state = MachineState::new();
        skup(0xE1A1, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0202);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut state = state_with(&[(0x1, 0xE)]);
        state.set_key(0xE).unwrap();
        skup(0xE1A1, &mut state).unwrap();
        assert_eq!(state.pc(), 0x0200);
    }

    #[test]
    fn test_fx07_ld() {
        let mut state = MachineState::new();
        state.set_delay_timer(0xF);
        moved(0xF107, &mut state).unwrap();
        assert_eq!(v(&state, 0x1), 0xF);
    }

    #[test]
    fn test_fx0a_ld_setsregisterneedingkey() {
        let mut state = MachineState::new();
        keyd(0xF10A, &mut state).unwrap();
        assert_eq!(state.register_needing_key(), Some(0x1));
    }

    #[test]
    fn test_fx15_ld() {
        let mut state = state_with(&[(0x1, 0xF)]);
        loads(0xF115, &mut state).unwrap();
        assert_eq!(state.delay_timer(), 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut state = state_with(&[(0x1, 0xF)]);
        ld(0xF118, &mut state).unwrap();
        assert_eq!(state.sound_timer(), 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut state = state_with(&[(0x1, 0x1)]);
        state.set_index(0x1);
        addi(0xF11E, &mut state).unwrap();
        assert_eq!(state.index(), 0x2);
    }

    #[test]
    fn test_fx29_ld() {
        let mut state = state_with(&[(0x1, 0x2)]);
        ldspr(0xF129, &mut state).unwrap();
        assert_eq!(state.index(), 0xA);
    }

    #[test]
    fn test_fx33_ld() {
        // 0x7B -> 123
        let mut state = state_with(&[(0x1, 0x7B)]);
        state.set_index(0x200);
        bcd(0xF133, &mut state).unwrap();
        assert_eq!(state.memory().slice(0x200, 3).unwrap(), &[0x1, 0x2, 0x3]);
    }

    #[test]
    fn test_fx33_ld_out_of_bounds() {
        let mut state = state_with(&[(0x1, 0xFF)]);
        state.set_index(0xFFE);
        assert!(bcd(0xF133, &mut state).is_err());
        assert_eq!(state.read_byte(0xFFE).unwrap(), 0x0);
    }

    #[test]
    fn test_fx55_ld() {
        let mut state = state_with(&[(0x0, 0x1), (0x1, 0x2), (0x2, 0x3), (0x3, 0x4), (0x4, 0x5)]);
        state.set_index(0x200);
        stor(0xF455, &mut state).unwrap();
        assert_eq!(
            state.memory().slice(0x200, 6).unwrap(),
            &[0x1, 0x2, 0x3, 0x4, 0x5, 0x0]
        );
        assert_eq!(state.index(), 0x200);
    }

    #[test]
    fn test_fx65_ld() {
        let mut state = MachineState::new();
        state.load(&[0x1, 0x2, 0x3, 0x4, 0x5, 0x6], 0x200).unwrap();
        state.set_index(0x200);
        read(0xF465, &mut state).unwrap();
        assert_eq!(state.registers()[0x0..0x6], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
        assert_eq!(state.index(), 0x200);
    }

    #[test]
    fn test_fx65_ld_out_of_bounds() {
        let mut state = MachineState::new();
        state.set_index(0xFFF);
        assert!(read(0xF165, &mut state).is_err());
        assert_eq!(state.registers(), &[0; 16]);
    }
}
