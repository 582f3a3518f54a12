use sc_hotkey::testing::{MockHotkeyService, ServiceCall};
use sc_hotkey::{
    HotkeyConfig, HotkeyError, HotkeyEvent, HotkeyRegistration, IdTable, Modifiers, WM_HOTKEY,
    WindowId,
};

const VK_A: u32 = 0x41;
const VK_F4: u32 = 0x73;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Tests run in parallel against the process-wide id table; keep windows apart.
fn window(n: usize) -> WindowId {
    WindowId::from_raw(n * 0x10_0000)
}

#[test]
fn construction_registers_and_id_is_stable() {
    init_logging();
    let os = MockHotkeyService::new();
    let hotkey = HotkeyRegistration::new(&os, window(1), VK_A, Modifiers::CTRL).unwrap();

    assert!(hotkey.is_registered());
    let id = hotkey.id();
    assert_eq!(id, (0x0002 ^ VK_A ^ 0x10_0000) as i32);
    assert_eq!(hotkey.id(), id);
    assert_eq!(
        os.calls(),
        vec![ServiceCall::Register {
            window: window(1),
            id,
            modifiers: Modifiers::CTRL,
            key: VK_A,
        }]
    );
}

#[test]
fn id_uses_xor_mixing() {
    init_logging();
    let os = MockHotkeyService::new();
    let hotkey = HotkeyRegistration::new(
        &os,
        WindowId::from_raw(0x1000),
        VK_A,
        Modifiers::CTRL | Modifiers::ALT,
    )
    .unwrap();

    assert_eq!(hotkey.id(), 0x1042);
}

#[test]
fn deregister_twice_touches_os_once() {
    init_logging();
    let os = MockHotkeyService::new();
    let mut hotkey = HotkeyRegistration::new(&os, window(2), VK_A, Modifiers::SHIFT).unwrap();

    assert!(hotkey.deregister().is_ok());
    assert!(!hotkey.is_registered());
    assert!(hotkey.deregister().is_ok());
    assert_eq!(os.unregister_calls(), 1);
}

#[test]
fn failed_registration_fails_construction() {
    init_logging();
    let os = MockHotkeyService::new();
    os.set_register_result(false);

    let err = HotkeyRegistration::new(&os, window(3), VK_A, Modifiers::ALT).unwrap_err();
    let id = sc_hotkey::hotkey_id(Modifiers::ALT, VK_A, window(3));

    assert_eq!(
        err,
        HotkeyError::RegistrationFailed {
            id,
            modifiers: Modifiers::ALT,
            key: VK_A,
        }
    );
    assert_eq!(os.unregister_calls(), 0);
    assert_eq!(os.live_count(), 0);
    assert_eq!(IdTable::global().owner(id), None);
}

#[test]
fn failed_deregistration_is_reported_and_stays_registered() {
    init_logging();
    let os = MockHotkeyService::new();
    let mut hotkey = HotkeyRegistration::new(&os, window(4), VK_A, Modifiers::CTRL).unwrap();

    os.set_unregister_result(false);
    assert_eq!(
        hotkey.dispose(),
        Err(HotkeyError::DeregistrationFailed { id: hotkey.id() })
    );
    assert!(hotkey.is_registered());

    os.set_unregister_result(true);
    assert!(hotkey.dispose().is_ok());
    assert!(!hotkey.is_registered());
    assert_eq!(os.unregister_calls(), 2);
}

#[test]
fn dispose_alt_f4_then_dispose_again() {
    init_logging();
    let os = MockHotkeyService::new();
    let mut hotkey = HotkeyRegistration::new(&os, window(5), VK_F4, Modifiers::ALT).unwrap();
    assert!(hotkey.is_registered());

    hotkey.dispose().unwrap();
    assert_eq!(os.unregister_calls(), 1);
    assert!(!hotkey.is_registered());

    hotkey.dispose().unwrap();
    assert_eq!(os.unregister_calls(), 1);

    drop(hotkey);
    assert_eq!(os.unregister_calls(), 1);
}

#[test]
fn drop_releases_the_os_registration() {
    init_logging();
    let os = MockHotkeyService::new();
    let id = {
        let hotkey = HotkeyRegistration::new(&os, window(6), VK_F4, Modifiers::CTRL).unwrap();
        assert!(os.is_live(window(6), hotkey.id()));
        hotkey.id()
    };

    assert!(!os.is_live(window(6), id));
    assert_eq!(os.unregister_calls(), 1);
    assert_eq!(IdTable::global().owner(id), None);
}

#[test]
fn colliding_combination_is_rejected() {
    init_logging();
    let os = MockHotkeyService::new();
    let ctrl_alt = Modifiers::CTRL | Modifiers::ALT;
    let first = HotkeyRegistration::new(&os, window(7), VK_A, ctrl_alt).unwrap();

    // ALT ^ 0x43 == (CTRL | ALT) ^ 0x41
    let err = HotkeyRegistration::new(&os, window(7), 0x43, Modifiers::ALT).unwrap_err();
    assert_eq!(err, HotkeyError::IdCollision { id: first.id() });
    assert_eq!(os.register_calls(), 1);
}

#[test]
fn live_combination_cannot_be_registered_twice() {
    init_logging();
    let os = MockHotkeyService::new();
    let first = HotkeyRegistration::new(&os, window(8), VK_A, Modifiers::SHIFT).unwrap();

    let err = HotkeyRegistration::new(&os, window(8), VK_A, Modifiers::SHIFT).unwrap_err();
    assert_eq!(err, HotkeyError::AlreadyRegistered { id: first.id() });
    assert_eq!(first.is_registered(), os.is_live(window(8), first.id()));

    drop(first);
    let second = HotkeyRegistration::new(&os, window(8), VK_A, Modifiers::SHIFT).unwrap();
    assert!(second.is_registered());
    assert_eq!(second.is_registered(), os.is_live(window(8), second.id()));
}

#[test]
fn id_stays_claimed_after_failed_drop() {
    init_logging();
    let os = MockHotkeyService::new();
    let ctrl_alt = Modifiers::CTRL | Modifiers::ALT;
    let leaked = HotkeyRegistration::new(&os, window(10), VK_A, ctrl_alt).unwrap();
    let id = leaked.id();

    os.set_unregister_result(false);
    drop(leaked);
    assert!(os.is_live(window(10), id));

    let err = HotkeyRegistration::new(&os, window(10), 0x43, Modifiers::ALT).unwrap_err();
    assert_eq!(err, HotkeyError::IdCollision { id });
    assert_eq!(
        IdTable::global().owner(id).map(|owner| owner.modifiers),
        Some(ctrl_alt)
    );
}

#[test]
fn disposed_value_frees_its_id() {
    init_logging();
    let os = MockHotkeyService::new();
    let ctrl_alt = Modifiers::CTRL | Modifiers::ALT;
    let mut first = HotkeyRegistration::new(&os, window(11), VK_A, ctrl_alt).unwrap();
    first.dispose().unwrap();

    let second = HotkeyRegistration::new(&os, window(11), 0x43, Modifiers::ALT).unwrap();
    assert_eq!(second.id(), first.id());
    assert!(!first.register());
    assert!(second.is_registered());
}

#[test]
fn dispatcher_can_route_by_id() {
    init_logging();
    let os = MockHotkeyService::new();
    let config: HotkeyConfig = "Ctrl+Shift+F4".parse().unwrap();
    let hotkey = HotkeyRegistration::from_config(&os, window(9), &config).unwrap();

    let wparam = hotkey.id() as u32 as usize;
    let event = HotkeyEvent::from_message(WM_HOTKEY, wparam).unwrap();
    assert!(hotkey.matches(&event));
    assert_eq!(hotkey.modifiers(), Modifiers::CTRL | Modifiers::SHIFT);
    assert_eq!(hotkey.key(), VK_F4);
}
