use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Client types
    types.push(clean_type(Client::export_to_string()?));
    types.push(clean_type(CreateClientRequest::export_to_string()?));
    types.push(clean_type(UpdateClientRequest::export_to_string()?));
    types.push(clean_type(ClientsResponse::export_to_string()?));

    // Project types
    types.push(clean_type(Project::export_to_string()?));
    types.push(clean_type(CreateProjectRequest::export_to_string()?));
    types.push(clean_type(UpdateProjectRequest::export_to_string()?));
    types.push(clean_type(ProjectsResponse::export_to_string()?));

    // Payment types
    types.push(clean_type(Payment::export_to_string()?));
    types.push(clean_type(CreatePaymentRequest::export_to_string()?));
    types.push(clean_type(UpdatePaymentRequest::export_to_string()?));
    types.push(clean_type(PaymentsResponse::export_to_string()?));

    // Portal types
    types.push(clean_type(Portal::export_to_string()?));
    types.push(clean_type(CreatePortalRequest::export_to_string()?));
    types.push(clean_type(UpdatePortalRequest::export_to_string()?));
    types.push(clean_type(PortalsResponse::export_to_string()?));

    // Form types
    types.push(clean_type(Form::export_to_string()?));
    types.push(clean_type(CreateFormRequest::export_to_string()?));
    types.push(clean_type(UpdateFormRequest::export_to_string()?));
    types.push(clean_type(FormsResponse::export_to_string()?));

    // Tracking types
    types.push(clean_type(TrackingEntry::export_to_string()?));
    types.push(clean_type(CreateTrackingRequest::export_to_string()?));
    types.push(clean_type(TrackingEntriesResponse::export_to_string()?));

    // Auth types
    types.push(clean_type(LoginRequest::export_to_string()?));
    types.push(clean_type(LoginResponse::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();
    let has_import = lines
        .iter()
        .any(|line| line.trim().starts_with("import type"));

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with("import type") {
                return has_import;
            }
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .cloned()
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
