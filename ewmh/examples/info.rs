use ewmh::prelude::*;
use std::collections::BTreeSet;

const SYMBOLIC: [&str; 3] = [_NET_WM_WINDOW_TYPE, _NET_WM_STATE, _NET_WM_ALLOWED_ACTIONS];

fn main() -> EwmhResult<()> {
    tracing_subscriber::fmt::init();

    let (conn, screen) = x11rb::connect(None).expect("failed to connect to the X server");
    let ewmh = Ewmh::new(X11Connection::from_screen(conn, screen));

    println!("Root Window Properties ({})", ewmh.root());
    println!("{:-<80}", "");
    let readable: BTreeSet<&str> = ewmh.readable_properties().into_iter().collect();
    for name in readable.iter().filter(|x| codec::descriptor(x).map(|x| x.scope) == Some(codec::Scope::Root)) {
        println!("{:<28} {}", name, ewmh.get_property(name, &[])?);
    }

    let win = match ewmh.active_window()? {
        Some(win) => win,
        None => return Ok(()),
    };
    println!();
    println!("Active Window Properties ({})", win);
    println!("{:-<80}", "");
    for name in readable.iter().filter(|x| codec::descriptor(x).map(|x| x.scope) == Some(codec::Scope::Window)) {
        // Atom lists are printed by name
        let args: Vec<Arg> = match SYMBOLIC.contains(name) {
            true => vec![win.into(), true.into()],
            false => vec![win.into()],
        };
        println!("{:<28} {}", name, ewmh.get_property(name, &args)?);
    }

    println!();
    println!("Writable: {:?}", ewmh.writable_properties().into_iter().collect::<BTreeSet<_>>());
    Ok(())
}
