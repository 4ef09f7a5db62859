//! Interrupt descriptor table.
//!
//! A fixed table of 256 long-mode gate descriptors. Only the vectors that get
//! a handler are marked present; the CPU faults on anything else.

use core::mem::size_of;
use x86_64::instructions::tables::lidt;
use x86_64::structures::gdt::SegmentSelector;
use x86_64::structures::DescriptorTablePointer;
use x86_64::VirtAddr;
use crate::constants::interrupts::{IDT_SIZE, INTERRUPT_GATE};

/// One 16-byte gate as the CPU reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct GateDescriptor {
    offset_low: u16,
    selector: u16,
    ist: u8,
    type_attr: u8,
    offset_mid: u16,
    offset_high: u32,
    reserved: u32,
}

impl GateDescriptor {
    pub const MISSING: GateDescriptor = GateDescriptor {
        offset_low: 0,
        selector: 0,
        ist: 0,
        type_attr: 0,
        offset_mid: 0,
        offset_high: 0,
        reserved: 0,
    };

    /// Present ring-0 interrupt gate jumping to `handler` through `selector`.
    pub fn interrupt_gate(handler: u64, selector: SegmentSelector) -> GateDescriptor {
        GateDescriptor {
            offset_low: (handler & 0xffff) as u16,
            selector: selector.0,
            ist: 0,
            type_attr: INTERRUPT_GATE,
            offset_mid: ((handler >> 16) & 0xffff) as u16,
            offset_high: (handler >> 32) as u32,
            reserved: 0,
        }
    }

    pub fn handler_addr(&self) -> u64 {
        u64::from(self.offset_low)
            | u64::from(self.offset_mid) << 16
            | u64::from(self.offset_high) << 32
    }

    pub fn selector(&self) -> u16 {
        self.selector
    }

    pub fn type_attr(&self) -> u8 {
        self.type_attr
    }

    pub fn is_present(&self) -> bool {
        self.type_attr & 0x80 != 0
    }
}

#[repr(C, align(16))]
pub struct InterruptTable {
    entries: [GateDescriptor; IDT_SIZE],
}

impl InterruptTable {
    pub const fn new() -> InterruptTable {
        InterruptTable {
            entries: [GateDescriptor::MISSING; IDT_SIZE],
        }
    }

    pub fn set_handler(&mut self, vector: u8, handler: u64, selector: SegmentSelector) {
        self.entries[usize::from(vector)] = GateDescriptor::interrupt_gate(handler, selector);
    }

    pub fn entry(&self, vector: u8) -> &GateDescriptor {
        &self.entries[usize::from(vector)]
    }

    /// The (limit, base) pair handed to `lidt`.
    pub fn pointer(&self) -> DescriptorTablePointer {
        DescriptorTablePointer {
            limit: (size_of::<Self>() - 1) as u16,
            base: VirtAddr::from_ptr(self as *const Self),
        }
    }

    /// Make this table the active IDT.
    pub fn load(&'static self) {
        // SAFETY: the table is 'static, so it outlives every interrupt the
        // CPU will dispatch through it.
        unsafe { lidt(&self.pointer()) };
    }
}
