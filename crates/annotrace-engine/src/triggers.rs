use std::collections::BTreeSet;

use annotrace_types::{ProjectName, Relation, SignificantSpan, Span, SpanTable};

/// Relation labels marking an ACE governor as a clue word or secondary
/// trigger. Older ACE documents carry no label at all; those default to
/// "interesting".
const INTERESTING_ROLE: &str = "interesting";
const TRIGGER_ROLE: &str = "trigger";

/// Pick the spans that should count toward sentence statistics, using the
/// corpus-specific rule for the project.
pub fn significant_spans(
    project: &ProjectName,
    span_table: &SpanTable,
    relations: &[Relation],
    standalone_spans: &[Span],
) -> Vec<SignificantSpan> {
    if project.is_ace() {
        ace_significant_spans(span_table, relations)
    } else {
        primary_triggers(span_table, relations, standalone_spans)
    }
}

/// Non-ACE rule: a span is a primary trigger unless it serves as the
/// argument (governor) of some other span. Self-loops do not disqualify a
/// span, so a trigger that is its own argument stays significant. Spans
/// listed inline in the document (argument-less positive or negative
/// examples) are always significant.
pub fn primary_triggers(
    span_table: &SpanTable,
    relations: &[Relation],
    standalone_spans: &[Span],
) -> Vec<SignificantSpan> {
    let mut governors = BTreeSet::new();
    for relation in relations {
        if relation.dependent != relation.governor && span_table.contains_key(&relation.governor) {
            governors.insert(relation.governor);
        }
    }

    let mut spans: Vec<SignificantSpan> = span_table
        .iter()
        .filter(|(id, _)| !governors.contains(*id))
        .map(|(_, span)| to_significant(span))
        .collect();

    spans.extend(standalone_spans.iter().map(to_significant));
    spans
}

/// ACE rule (inverted): only governors of relations labeled "interesting"
/// or "trigger" are significant; these are the clue words and secondary
/// triggers annotators added by hand.
pub fn ace_significant_spans(span_table: &SpanTable, relations: &[Relation]) -> Vec<SignificantSpan> {
    let mut added = BTreeSet::new();
    for relation in relations {
        let role = relation
            .relation_type
            .as_deref()
            .unwrap_or(INTERESTING_ROLE);
        if role == INTERESTING_ROLE || role == TRIGGER_ROLE {
            added.insert(relation.governor);
        }
    }

    added
        .into_iter()
        .filter_map(|id| span_table.get(&id))
        .map(to_significant)
        .collect()
}

fn to_significant(span: &Span) -> SignificantSpan {
    SignificantSpan {
        begin: span.begin_offset(),
        end: span.end,
        negative_example: span.negative_example,
    }
}
