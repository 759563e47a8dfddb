use covscan_core::model::{Batch, RunOutcome};

pub fn print_outcome(outcome: &RunOutcome) {
    println!("=== Run ===\n");
    println!(
        "  {} document(s) in {} batch(es)\n",
        outcome.run.total_documents, outcome.run.total_batches
    );

    for batch in &outcome.run.batches {
        println!("  Batch {} ({} pages):", batch.batch_number, batch.total_pages);
        let max_name = batch
            .filenames
            .iter()
            .map(|f| f.len())
            .max()
            .unwrap_or(10);
        for filename in &batch.filenames {
            let summary = &batch.documents[filename];
            let extraction_note = if summary.text_length == 0 {
                "  (no text extracted)"
            } else {
                ""
            };
            println!(
                "    {:<width$}  {} pages, {} chars{}",
                filename,
                summary.page_count,
                summary.text_length,
                extraction_note,
                width = max_name
            );
        }
        println!();
    }

    println!("=== Coverage ===\n");
    println!(
        "  {}/{} controls covered ({:.1}%)\n",
        outcome.coverage.summary.covered_controls,
        outcome.coverage.summary.total_controls,
        outcome.coverage.summary.coverage_percent
    );

    if !outcome.coverage.summary.covered.is_empty() {
        println!("  Covered: {}\n", outcome.coverage.summary.covered.join(", "));
    }

    let max_name = outcome
        .coverage
        .per_document
        .keys()
        .map(|f| f.len())
        .max()
        .unwrap_or(10);
    for (filename, doc) in &outcome.coverage.per_document {
        let covered: Vec<&str> = doc.covered_controls.iter().map(|s| s.as_str()).collect();
        println!(
            "  {:<width$}  primary: {:<8}  covers: {}",
            filename,
            doc.primary_control,
            if covered.is_empty() {
                "-".to_string()
            } else {
                covered.join(", ")
            },
            width = max_name
        );
    }
}

pub fn print_batches(batches: &[Batch], max_pages: usize) {
    if batches.is_empty() {
        println!("No PDF documents found.");
        return;
    }

    println!("Batch plan (ceiling {max_pages} pages):\n");
    for batch in batches {
        let oversized_marker = if batch.total_pages > max_pages {
            "  [oversized singleton]"
        } else {
            ""
        };
        println!(
            "  Batch {} - {} document(s), {} pages{}",
            batch.number,
            batch.documents.len(),
            batch.total_pages,
            oversized_marker
        );
        for doc in &batch.documents {
            println!("    {:<40} {} pages", doc.filename, doc.page_count);
        }
        println!();
    }
}
