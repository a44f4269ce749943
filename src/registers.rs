use crate::error::Chip8Error;
use crate::memory::{PROGRAM_BASE, TypeAddr};

/// Index of the flag register. Opcodes that report carry, borrow or sprite
/// collision always write here, clobbering whatever a program stored in VF.
pub const FLAG: u8 = 0xF;

pub const STACK_DEPTH: usize = 16;

/// 16 general-purpose 8-bit registers plus the address register I and the
/// program counter. Only the low 12 bits of I and pc are meaningful.
pub struct Registers {
    v: [u8; 16],
    pub i: TypeAddr,
    pub pc: TypeAddr,
}

impl Registers {
    pub fn new() -> Self {
        Self {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_BASE,
        }
    }

    pub fn get(&self, reg_num: u8) -> u8 {
        self.v[reg_num as usize]
    }

    pub fn set(&mut self, reg_num: u8, value: u8) {
        self.v[reg_num as usize] = value;
    }

    pub fn set_flag(&mut self, value: u8) {
        self.v[FLAG as usize] = value;
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-capacity stack of return addresses. Overflow and underflow mean the
/// program's control flow is corrupt, so both surface as errors instead of
/// wrapping.
pub struct Stack {
    frames: [TypeAddr; STACK_DEPTH],
    sp: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self {
            frames: [0; STACK_DEPTH],
            sp: 0,
        }
    }

    pub fn push(&mut self, addr: TypeAddr) -> Result<(), Chip8Error> {
        if self.sp == STACK_DEPTH {
            return Err(Chip8Error::StackOverflow);
        }
        self.frames[self.sp] = addr;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<TypeAddr, Chip8Error> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow);
        }
        self.sp -= 1;
        Ok(self.frames[self.sp])
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_start_zeroed_with_pc_at_program_base() {
        let regs = Registers::new();
        assert_eq!(regs.pc, 0x200);
        assert_eq!(regs.i, 0);
        assert!((0..16).all(|r| regs.get(r) == 0));
    }

    #[test]
    fn set_flag_writes_vf() {
        let mut regs = Registers::new();
        regs.set_flag(1);
        assert_eq!(regs.get(FLAG), 1);
    }

    #[test]
    fn stack_is_last_in_first_out() {
        let mut stack = Stack::new();
        stack.push(0x200).unwrap();
        stack.push(0x400).unwrap();
        assert_eq!(stack.pop().unwrap(), 0x400);
        assert_eq!(stack.pop().unwrap(), 0x200);
    }

    #[test]
    fn push_past_capacity_overflows() {
        let mut stack = Stack::new();
        for i in 0..STACK_DEPTH {
            stack.push(i as TypeAddr).unwrap();
        }
        assert_eq!(stack.push(0x200).unwrap_err(), Chip8Error::StackOverflow);
    }

    #[test]
    fn pop_of_empty_stack_underflows() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop().unwrap_err(), Chip8Error::StackUnderflow);
    }
}
