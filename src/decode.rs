use crate::error::Chip8Error;
use crate::memory::TypeAddr;

/// Decoded instruction. Operands follow the conventional notation: X and Y
/// are register indices, NN an immediate byte, N an immediate nibble, NNN a
/// 12-bit address.
#[derive(Debug, PartialEq, Eq)]
pub enum OpCode {
    /// 00E0
    ClearScreen,
    /// 00EE
    Return,
    /// 1NNN
    Jump(TypeAddr),
    /// 2NNN
    Call(TypeAddr),
    /// 3XNN
    SkipEqualConstant(u8, u8),
    /// 4XNN
    SkipNotEqualConstant(u8, u8),
    /// 5XY0
    SkipEqualRegister(u8, u8),
    /// 6XNN
    SetRegister(u8, u8),
    /// 7XNN
    AddToRegister(u8, u8),
    /// 8XY0
    CopyRegister(u8, u8),
    /// 8XY1
    Or(u8, u8),
    /// 8XY2
    And(u8, u8),
    /// 8XY4
    Add(u8, u8),
    /// 8XY5
    SubtractForward(u8, u8),
    /// 8XY6
    RightShift(u8),
    /// 8XY7
    SubtractBackward(u8, u8),
    /// 8XYE
    LeftShift(u8),
    /// 9XY0
    SkipNotEqualRegister(u8, u8),
    /// ANNN
    SetIndex(TypeAddr),
    /// BNNN
    JumpWithOffset(TypeAddr),
    /// CXNN
    Random(u8, u8),
    /// DXYN
    Draw(u8, u8, u8),
    /// EX9E
    SkipIfPressed(u8),
    /// EXA1
    SkipIfNotPressed(u8),
    /// FX07
    ReadDelay(u8),
    /// FX0A
    WaitForKey(u8),
    /// FX15
    SetDelay(u8),
    /// FX18
    SetSound(u8),
    /// FX1E
    AddToIndex(u8),
    /// FX29
    PointGlyph(u8),
    /// FX33
    StoreBcd(u8),
    /// FX55
    StoreRegisters(u8),
    /// FX65
    LoadRegisters(u8),
}

impl OpCode {
    /// Decodes a raw 16-bit instruction. Encodings outside the original
    /// instruction set (including 8XY3, which the machine never had) are an
    /// error rather than a silent no-op.
    pub fn decode(code: u16) -> Result<Self, Chip8Error> {
        let x = ((code >> 8) & 0xF) as u8;
        let y = ((code >> 4) & 0xF) as u8;
        let n = (code & 0xF) as u8;
        let nn = (code & 0xFF) as u8;
        let nnn = code & 0xFFF;

        let op = match (code >> 12, x, y, n) {
            (0x0, 0x0, 0xE, 0x0) => Self::ClearScreen,
            (0x0, 0x0, 0xE, 0xE) => Self::Return,
            (0x1, ..) => Self::Jump(nnn),
            (0x2, ..) => Self::Call(nnn),
            (0x3, ..) => Self::SkipEqualConstant(x, nn),
            (0x4, ..) => Self::SkipNotEqualConstant(x, nn),
            (0x5, .., 0x0) => Self::SkipEqualRegister(x, y),
            (0x6, ..) => Self::SetRegister(x, nn),
            (0x7, ..) => Self::AddToRegister(x, nn),
            (0x8, .., 0x0) => Self::CopyRegister(x, y),
            (0x8, .., 0x1) => Self::Or(x, y),
            (0x8, .., 0x2) => Self::And(x, y),
            (0x8, .., 0x4) => Self::Add(x, y),
            (0x8, .., 0x5) => Self::SubtractForward(x, y),
            (0x8, .., 0x6) => Self::RightShift(x),
            (0x8, .., 0x7) => Self::SubtractBackward(x, y),
            (0x8, .., 0xE) => Self::LeftShift(x),
            (0x9, .., 0x0) => Self::SkipNotEqualRegister(x, y),
            (0xA, ..) => Self::SetIndex(nnn),
            (0xB, ..) => Self::JumpWithOffset(nnn),
            (0xC, ..) => Self::Random(x, nn),
            (0xD, ..) => Self::Draw(x, y, n),
            (0xE, _, 0x9, 0xE) => Self::SkipIfPressed(x),
            (0xE, _, 0xA, 0x1) => Self::SkipIfNotPressed(x),
            (0xF, _, 0x0, 0x7) => Self::ReadDelay(x),
            (0xF, _, 0x0, 0xA) => Self::WaitForKey(x),
            (0xF, _, 0x1, 0x5) => Self::SetDelay(x),
            (0xF, _, 0x1, 0x8) => Self::SetSound(x),
            (0xF, _, 0x1, 0xE) => Self::AddToIndex(x),
            (0xF, _, 0x2, 0x9) => Self::PointGlyph(x),
            (0xF, _, 0x3, 0x3) => Self::StoreBcd(x),
            (0xF, _, 0x5, 0x5) => Self::StoreRegisters(x),
            (0xF, _, 0x6, 0x5) => Self::LoadRegisters(x),
            _ => return Err(Chip8Error::UnsupportedOpcode { opcode: code }),
        };
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_operand_fields() {
        assert_eq!(OpCode::decode(0x00E0).unwrap(), OpCode::ClearScreen);
        assert_eq!(OpCode::decode(0x1ABC).unwrap(), OpCode::Jump(0xABC));
        assert_eq!(
            OpCode::decode(0x6C42).unwrap(),
            OpCode::SetRegister(0xC, 0x42)
        );
        assert_eq!(OpCode::decode(0x8124).unwrap(), OpCode::Add(0x1, 0x2));
        assert_eq!(OpCode::decode(0xD395).unwrap(), OpCode::Draw(0x3, 0x9, 0x5));
        assert_eq!(OpCode::decode(0xF533).unwrap(), OpCode::StoreBcd(0x5));
    }

    #[test]
    fn secondary_dispatch_requires_exact_low_bits() {
        assert_eq!(OpCode::decode(0x5120).unwrap(), OpCode::SkipEqualRegister(1, 2));
        assert_eq!(
            OpCode::decode(0x5121).unwrap_err(),
            Chip8Error::UnsupportedOpcode { opcode: 0x5121 }
        );
        assert_eq!(
            OpCode::decode(0xE19F).unwrap_err(),
            Chip8Error::UnsupportedOpcode { opcode: 0xE19F }
        );
    }

    #[test]
    fn xor_is_outside_the_instruction_set() {
        assert_eq!(
            OpCode::decode(0x8123).unwrap_err(),
            Chip8Error::UnsupportedOpcode { opcode: 0x8123 }
        );
    }

    #[test]
    fn rca_call_is_unsupported() {
        assert_eq!(
            OpCode::decode(0x0123).unwrap_err(),
            Chip8Error::UnsupportedOpcode { opcode: 0x0123 }
        );
    }
}
