//! `trustgate extensions ...` – builtin extension registry queries.

use trustgate_core::extensions::{
    can_uninstall, display_name, is_builtin_extension, is_well_formed_extension_id,
    ForceLoadAllowlist, BUILTIN_EXTENSIONS,
};

pub fn run_extensions_list() {
    println!("{:<34} {}", "ID", "NAME");
    for ext in BUILTIN_EXTENSIONS {
        println!("{:<34} {}", ext.id, ext.display_name);
    }
}

pub fn run_extensions_show(id: &str) {
    println!("{:<16} {}", "id:", id);
    println!("{:<16} {}", "builtin:", is_builtin_extension(id));
    println!("{:<16} {}", "can uninstall:", can_uninstall(id));
    println!("{:<16} {}", "display name:", display_name(id).unwrap_or("-"));
    println!(
        "{:<16} {}",
        "force-loadable:",
        ForceLoadAllowlist::new().permits(id)
    );
    println!("{:<16} {}", "well-formed:", is_well_formed_extension_id(id));
}

pub fn run_extensions_gate(requested: &[String]) {
    if requested.is_empty() {
        println!("No extensions requested.");
        return;
    }
    let decision = ForceLoadAllowlist::new().filter(requested);
    for id in &decision.allowed {
        println!("load    {id}");
    }
    for id in &decision.rejected {
        println!("reject  {id}");
    }
    tracing::debug!(
        allowed = decision.allowed.len(),
        rejected = decision.rejected.len(),
        "force-load gate evaluated"
    );
}
