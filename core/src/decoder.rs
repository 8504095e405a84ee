use crate::error::{Chip8Error, Result};

/// Every operation the interpreter knows how to execute
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpcodeId {
    /// 00E0
    Clear,
    /// 00EE
    Return,
    /// 1nnn
    Jump,
    /// 2nnn
    Call,
    /// 3xnn
    SkipEqImm,
    /// 4xnn
    SkipNeImm,
    /// 5xy0
    SkipEqReg,
    /// 6xnn
    LoadImm,
    /// 7xnn
    AddImm,
    /// 8xy0
    Move,
    /// 8xy1
    Or,
    /// 8xy2
    And,
    /// 8xy3
    Xor,
    /// 8xy4
    AddReg,
    /// 8xy5
    Sub,
    /// 8xy6
    ShiftRight,
    /// 8xy7
    SubReverse,
    /// 8xyE
    ShiftLeft,
    /// 9xy0
    SkipNeReg,
    /// Annn
    LoadIndex,
    /// Bnnn
    JumpOffset,
    /// Cxnn
    Random,
    /// Dxyn
    Draw,
    /// Ex9E
    SkipKeyEq,
    /// ExA1
    SkipKeyNe,
    /// Fx07
    LoadDelay,
    /// Fx0A
    WaitKey,
    /// Fx15
    SetDelay,
    /// Fx18
    SetSound,
    /// Fx1E
    AddIndex,
    /// Fx29
    LoadGlyph,
    /// Fx33
    StoreBcd,
    /// Fx55
    StoreRegisters,
    /// Fx65
    LoadRegisters,
}

impl OpcodeId {
    /// The operations that leave the program counter where they put it.
    /// Everything else gets the PC bumped by one instruction after it executes.
    pub fn sets_pc(self) -> bool {
        matches!(
            self,
            OpcodeId::Jump | OpcodeId::Call | OpcodeId::Return | OpcodeId::JumpOffset
        )
    }
}

struct Entry {
    mask: u16,
    pattern: u16,
    id: OpcodeId,
}

const fn entry(mask: u16, pattern: u16, id: OpcodeId) -> Entry {
    Entry { mask, pattern, id }
}

/// Searched top to bottom, first match wins, so more specific masks have to come first:
/// `8xy6` has to be tried before anything that only looks at the leading nibble.
#[rustfmt::skip]
const DECODE_TABLE: [Entry; 34] = [
    entry(0xFFFF, 0x00E0, OpcodeId::Clear),
    entry(0xFFFF, 0x00EE, OpcodeId::Return),
    entry(0xF0FF, 0xE09E, OpcodeId::SkipKeyEq),
    entry(0xF0FF, 0xE0A1, OpcodeId::SkipKeyNe),
    entry(0xF0FF, 0xF007, OpcodeId::LoadDelay),
    entry(0xF0FF, 0xF00A, OpcodeId::WaitKey),
    entry(0xF0FF, 0xF015, OpcodeId::SetDelay),
    entry(0xF0FF, 0xF018, OpcodeId::SetSound),
    entry(0xF0FF, 0xF01E, OpcodeId::AddIndex),
    entry(0xF0FF, 0xF029, OpcodeId::LoadGlyph),
    entry(0xF0FF, 0xF033, OpcodeId::StoreBcd),
    entry(0xF0FF, 0xF055, OpcodeId::StoreRegisters),
    entry(0xF0FF, 0xF065, OpcodeId::LoadRegisters),
    entry(0xF00F, 0x5000, OpcodeId::SkipEqReg),
    entry(0xF00F, 0x8000, OpcodeId::Move),
    entry(0xF00F, 0x8001, OpcodeId::Or),
    entry(0xF00F, 0x8002, OpcodeId::And),
    entry(0xF00F, 0x8003, OpcodeId::Xor),
    entry(0xF00F, 0x8004, OpcodeId::AddReg),
    entry(0xF00F, 0x8005, OpcodeId::Sub),
    entry(0xF00F, 0x8006, OpcodeId::ShiftRight),
    entry(0xF00F, 0x8007, OpcodeId::SubReverse),
    entry(0xF00F, 0x800E, OpcodeId::ShiftLeft),
    entry(0xF00F, 0x9000, OpcodeId::SkipNeReg),
    entry(0xF000, 0x1000, OpcodeId::Jump),
    entry(0xF000, 0x2000, OpcodeId::Call),
    entry(0xF000, 0x3000, OpcodeId::SkipEqImm),
    entry(0xF000, 0x4000, OpcodeId::SkipNeImm),
    entry(0xF000, 0x6000, OpcodeId::LoadImm),
    entry(0xF000, 0x7000, OpcodeId::AddImm),
    entry(0xF000, 0xA000, OpcodeId::LoadIndex),
    entry(0xF000, 0xB000, OpcodeId::JumpOffset),
    entry(0xF000, 0xC000, OpcodeId::Random),
    entry(0xF000, 0xD000, OpcodeId::Draw),
];

/// Selects the operation for a given instruction word
pub fn decode(word: u16) -> Result<OpcodeId> {
    DECODE_TABLE
        .iter()
        .find(|e| word & e.mask == e.pattern)
        .map(|e| e.id)
        .ok_or(Chip8Error::UnknownOpcode { opcode: word })
}
