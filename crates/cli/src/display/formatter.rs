use avalonia_scaffold_core::{
    InjectionOutcome, NamespacePair, ProjectRoot, ScaffoldPlan, ScaffoldReport,
};

pub fn describe_root(root: &ProjectRoot) -> String {
    if root.is_solution_root {
        format!("solution at {}", root.path.display())
    } else {
        format!("project '{}' at {}", root.project_name, root.path.display())
    }
}

pub fn describe_injection(outcome: &InjectionOutcome) -> String {
    match outcome {
        InjectionOutcome::NoBaseClass => "no base class found".to_string(),
        InjectionOutcome::Injected {
            base_class,
            import: Some(import),
        } => format!("inherits {base_class} (using {import})"),
        InjectionOutcome::Injected {
            base_class,
            import: None,
        } => format!("inherits {base_class}"),
    }
}

pub fn print_namespaces(root: &ProjectRoot, namespaces: &NamespacePair) {
    println!("📦 Root: {}", describe_root(root));
    println!("   • Full namespace: {}", namespaces.full_namespace);
    println!("   • Code namespace: {}", namespaces.code_namespace);
}

pub fn print_plan(plan: &ScaffoldPlan) {
    println!("🔍 Dry run, nothing was written");
    print_namespaces(&plan.project_root, &plan.namespaces);
    println!("\n🚀 Generator: {}", plan.generator_command);
    println!("   Working directory: {}", plan.target_dir.display());
    for file in &plan.files {
        println!("   📄 {}", file.display());
    }

    if let Some(ref view_model) = plan.view_model {
        println!("\n🧩 View-model: {}", view_model.path.display());
        println!("   • Namespace: {}", view_model.namespaces.code_namespace);
        println!("   • Base class folder: {}", view_model.base_dir.display());
    }
}

pub fn print_report(report: &ScaffoldReport) {
    print_namespaces(&report.project_root, &report.namespaces);
    if report.generator_output.forced {
        println!("⚠️  Generator needed --force to complete");
    }

    println!();
    for file in &report.rewritten {
        println!("✅ {}", file.display());
    }

    if let Some(ref view_model) = report.view_model {
        println!(
            "✅ {} ({})",
            view_model.path.display(),
            describe_injection(&view_model.injection)
        );
    }

    if let Some(ref error) = report.view_model_error {
        println!("⚠️  View-model not created: {error}");
    }
}
