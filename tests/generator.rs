//! Tests for the route source generator.
mod common;
use common::*;
use kumiki::codegen::EMPTY_GRAPH_PLACEHOLDER;
use kumiki::prelude::*;

#[test]
fn test_empty_graph_yields_placeholder() {
    let graph = GraphDefinition::default();
    assert_eq!(generate_route(&graph), EMPTY_GRAPH_PLACEHOLDER);
}

#[test]
fn test_placeholder_is_independent_of_edges() {
    let graph = GraphDefinition {
        nodes: vec![],
        edges: vec![EdgeDefinition {
            id: "e-1".to_string(),
            source: "ghost-1".to_string(),
            target: "ghost-2".to_string(),
        }],
    };
    assert_eq!(generate_route(&graph), EMPTY_GRAPH_PLACEHOLDER);
}

#[test]
fn test_one_wrapper_per_tool_node_in_list_order() {
    let graph = graph_with_tools(&["getWeather", "searchDocs", "createChart"]);
    let source = generate_route(&graph);

    assert_eq!(source.matches("export const ").count(), 3);
    for name in ["getWeather", "searchDocs", "createChart"] {
        assert!(source.contains(&format!("interface {}Props {{", name)));
        assert!(source.contains(&format!(
            "export const {} = ({{ session, dataStream }}: {}Props) =>",
            name, name
        )));
    }

    let first = source.find("export const getWeather").unwrap();
    let second = source.find("export const searchDocs").unwrap();
    let third = source.find("export const createChart").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_auth_guard_present_only_with_tools() {
    let with_tools = generate_route(&graph_with_tools(&["getWeather"]));
    assert!(with_tools.contains("const session = await auth();"));
    assert!(with_tools.contains("return new Response('Unauthorized', { status: 401 });"));
    assert!(with_tools.contains("import { auth } from '@/app/(auth)/auth';"));

    let without_tools = generate_route(&simple_graph());
    assert!(!without_tools.contains("await auth()"));
    assert!(!without_tools.contains("import { z } from 'zod';"));
}

#[test]
fn test_tools_are_wired_into_stream_call() {
    let source = generate_route(&graph_with_tools(&["getWeather"]));
    assert!(source.contains("          tools: {\n"));
    assert!(source.contains("            getWeather: getWeather({ session, dataStream }),"));
}

#[test]
fn test_second_stream_text_node_is_dead_data() {
    let mut graph = simple_graph();
    let baseline = generate_route(&graph);

    graph.nodes.push(stream_text_node(
        "streamText-2",
        StreamTextData {
            system_prompt: "You are a pirate.".to_string(),
            max_steps: 9,
            ..StreamTextData::default()
        },
    ));
    assert_eq!(generate_route(&graph), baseline);
}

#[test]
fn test_missing_stream_text_emits_stub_handler() {
    let graph = GraphDefinition {
        nodes: vec![tool_node("tool-1", "getWeather")],
        edges: vec![],
    };
    let source = generate_route(&graph);
    assert!(source.contains("// Add a streamText implementation here"));
    assert!(source.contains("return new Response('Not implemented', { status: 501 });"));
    // No streamText node also means the default provider import.
    assert!(source.contains("import { openai } from \"@ai-sdk/openai\";"));
}

#[test]
fn test_stream_node_import_statement_is_used() {
    let graph = GraphDefinition {
        nodes: vec![stream_text_node(
            "streamText-1",
            StreamTextData {
                import_statement: "import { anthropic } from \"@ai-sdk/anthropic\";".to_string(),
                model_format: "anthropic('claude-3-5-haiku-20241022')".to_string(),
                ..StreamTextData::default()
            },
        )],
        edges: vec![],
    };
    let source = generate_route(&graph);
    assert!(source.contains("import { anthropic } from \"@ai-sdk/anthropic\";"));
    assert!(source.contains("          model: anthropic('claude-3-5-haiku-20241022'),"));
    assert!(!source.contains("import { openai }"));
}

#[test]
fn test_empty_model_snippets_fall_back_to_openai_defaults() {
    let graph = GraphDefinition {
        nodes: vec![stream_text_node(
            "streamText-1",
            StreamTextData {
                import_statement: String::new(),
                model_format: String::new(),
                ..StreamTextData::default()
            },
        )],
        edges: vec![],
    };
    let source = generate_route(&graph);
    assert!(source.contains("import { openai } from \"@ai-sdk/openai\";"));
    assert!(source.contains("          model: openai('gpt-4o'),"));
}

#[test]
fn test_messages_line_is_gated_on_flag() {
    let mut graph = simple_graph();
    let enabled = generate_route(&graph);
    assert!(enabled.contains("          messages,\n"));

    if let NodeData::StreamText(data) = &mut graph.nodes[0].data {
        data.messages = false;
    }
    let disabled = generate_route(&graph);
    assert!(!disabled.contains("          messages,\n"));
}

#[test]
fn test_prompt_and_max_steps_are_substituted_literally() {
    let graph = GraphDefinition {
        nodes: vec![stream_text_node(
            "streamText-1",
            StreamTextData {
                system_prompt: "Answer in haiku.".to_string(),
                max_steps: 7,
                ..StreamTextData::default()
            },
        )],
        edges: vec![],
    };
    let source = generate_route(&graph);
    assert!(source.contains("          system: 'Answer in haiku.',"));
    assert!(source.contains("          maxSteps: 7,"));
}

#[test]
fn test_malformed_tool_parameters_degrade_to_empty_object() {
    let graph = GraphDefinition {
        nodes: vec![NodeDefinition {
            id: "tool-1".to_string(),
            kind: NodeKind::Tool,
            position: Position::default(),
            data: NodeData::Tool(ToolData {
                parameters: "{not json".to_string(),
                ..ToolData::default()
            }),
        }],
        edges: vec![],
    };
    let source = generate_route(&graph);
    assert!(source.contains("parameters: z.object({}),"));
}

#[test]
fn test_handler_is_wrapped_in_try_catch() {
    let source = generate_route(&simple_graph());
    assert!(source.contains("export async function POST(request: Request) {"));
    assert!(source.contains("  } catch (error) {"));
    assert!(source.contains("    return NextResponse.json({ error }, { status: 400 });"));
    assert!(source.ends_with("}\n"));
}

#[test]
fn test_edges_never_influence_output() {
    let mut graph = graph_with_tools(&["getWeather"]);
    let baseline = generate_route(&graph);

    graph.edges.push(EdgeDefinition {
        id: "e-1".to_string(),
        source: "streamText-1".to_string(),
        target: "tool-1".to_string(),
    });
    assert_eq!(generate_route(&graph), baseline);
}

#[test]
fn test_line_number_rendering_matches_gutter() {
    let source = generate_route(&simple_graph());
    let numbered = kumiki::codegen::with_line_numbers(&source);
    let lines: Vec<&str> = source.split('\n').collect();
    let width = lines.len().to_string().len();
    assert_eq!(numbered.split('\n').count(), lines.len());
    assert_eq!(
        numbered.split('\n').next().unwrap(),
        format!("{:>width$}  {}", 1, lines[0])
    );
}
