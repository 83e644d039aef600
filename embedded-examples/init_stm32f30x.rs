//! Full example code for setting up an HT1621 six digit segment LCD. This runs on an STM32F303RE,
//! with PB12 wired to /CS, PB13 to /WR, PB15 to DATA, and PB14 switching the backlight.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate ht1621;
extern crate panic_abort;

use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::prelude::*;
use ht1621 as lcd;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

fn main() -> ! {
    // Get peripherals and set up RCC.
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut delay = hal::delay::Delay::new(cp.SYST, clocks);

    // Get GPIO B where the display is connected. All four lines are plain push-pull outputs; the
    // driver clocks the serial link itself.
    let mut gpiob = dp.GPIOB.split(&mut rcc.ahb);
    let mut lcd_cs = gpiob
        .pb12
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let lcd_wr = gpiob
        .pb13
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let lcd_data = gpiob
        .pb15
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let lcd_backlight = gpiob
        .pb14
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);

    // Idle state for /CS is high.
    lcd_cs.set_high().ok();

    // Create the interface and bring the controller up. This board has no crystal.
    let iface = lcd::BitBangInterface::new(Some(lcd_cs), Some(lcd_wr), Some(lcd_data));
    let mut disp = lcd::Display::new(
        iface,
        Some(lcd_backlight),
        lcd::Config::new().oscillator(lcd::Oscillator::InternalRc),
    );
    disp.backlight_on();
    disp.set_battery_level(3);

    // Count down from 10.00 in hundredths.
    let mut centis: i32 = 1000;
    loop {
        disp.print_fixed(centis as f32 / 100.0, 2);
        if centis == 0 {
            break;
        }
        centis -= 1;
        delay.delay_ms(10_u16);
    }

    disp.set_battery_level(0);
    disp.display_off();
    disp.backlight_off();

    loop {
        asm::wfi();
    }
}
