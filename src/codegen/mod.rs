//! Graph to API-route source generation.
//!
//! A pure, synchronous string computation over the node list: no branch point
//! is revisited, edges are never consulted, and nothing here can fail. The
//! worst outcome of bad input is cosmetically degraded output (an empty zod
//! object, a fallback model constructor), never an error.

pub mod render;
mod zod;

pub use render::with_line_numbers;
pub use zod::json_schema_to_zod;

use crate::graph::{GraphDefinition, StreamTextData, ToolData};

/// The placeholder emitted for an empty graph.
pub const EMPTY_GRAPH_PLACEHOLDER: &str = "// Drag and drop nodes to generate code\n\n// Add StreamText and Tool nodes to generate a complete API route";

const DEFAULT_IMPORT: &str = "import { openai } from \"@ai-sdk/openai\";";
const DEFAULT_MODEL_CALL: &str = "openai('gpt-4o')";

/// Generates the API route source for a graph.
pub fn generate_route(graph: &GraphDefinition) -> String {
    RouteGenerator::new(graph).generate()
}

/// Walks a node list and concatenates the route source. The first streamText
/// node drives the handler body; every tool node gets a wrapper declaration
/// in list order. Additional streamText nodes are dead data.
pub struct RouteGenerator<'a> {
    graph: &'a GraphDefinition,
}

impl<'a> RouteGenerator<'a> {
    pub fn new(graph: &'a GraphDefinition) -> Self {
        Self { graph }
    }

    pub fn generate(&self) -> String {
        if self.graph.nodes.is_empty() {
            return EMPTY_GRAPH_PLACEHOLDER.to_string();
        }

        let stream = self.graph.first_stream_text();
        let tools: Vec<&ToolData> = self.graph.tools().collect();

        let mut code = String::new();
        self.emit_imports(&mut code, stream, &tools);
        self.emit_tool_wrappers(&mut code, &tools);
        self.emit_handler(&mut code, stream, &tools);
        code
    }

    fn emit_imports(
        &self,
        code: &mut String,
        stream: Option<&StreamTextData>,
        tools: &[&ToolData],
    ) {
        code.push_str("import { streamText, createDataStreamResponse, type Message } from 'ai';\n");
        code.push_str("import { NextResponse } from 'next/server';\n");

        // The first streamText node's stored import line wins; a missing or
        // empty snippet falls back to the OpenAI default.
        match stream {
            Some(data) if !data.import_statement.is_empty() => {
                code.push_str(&data.import_statement);
                code.push('\n');
            }
            _ => {
                code.push_str(DEFAULT_IMPORT);
                code.push('\n');
            }
        }

        if !tools.is_empty() {
            code.push_str("import { z } from 'zod';\n");
            code.push_str("import { generateUUID } from '@/lib/utils';\n");
            code.push_str("import { DataStreamWriter, tool } from 'ai';\n");
            code.push_str("import { Session } from 'next-auth';\n");
            code.push_str("import { auth } from '@/app/(auth)/auth';\n\n");
        } else {
            code.push('\n');
        }
    }

    fn emit_tool_wrappers(&self, code: &mut String, tools: &[&ToolData]) {
        for tool in tools {
            code.push_str(&format!("interface {}Props {{\n", tool.name));
            code.push_str("  session: Session;\n");
            code.push_str("  dataStream: DataStreamWriter;\n");
            code.push_str("}\n\n");

            code.push_str(&format!(
                "export const {} = ({{ session, dataStream }}: {}Props) =>\n",
                tool.name, tool.name
            ));
            code.push_str("  tool({\n");
            code.push_str(&format!("    description: '{}',\n", tool.description));
            code.push_str(&format!(
                "    parameters: z.object({}),\n",
                json_schema_to_zod(&tool.parameters)
            ));
            code.push_str("    execute: async (params) => {\n");
            code.push_str("      // Add your tool implementation here\n");
            code.push_str("      const id = generateUUID();\n\n");
            code.push_str("      // Example of writing data back to the stream\n");
            code.push_str("      dataStream.writeData({\n");
            code.push_str("        type: 'id',\n");
            code.push_str("        content: id,\n");
            code.push_str("      });\n\n");
            code.push_str("      return {\n");
            code.push_str("        id,\n");
            code.push_str("        message: 'Tool executed successfully'\n");
            code.push_str("      };\n");
            code.push_str("    },\n");
            code.push_str("  });\n\n");
        }
    }

    fn emit_handler(
        &self,
        code: &mut String,
        stream: Option<&StreamTextData>,
        tools: &[&ToolData],
    ) {
        code.push_str("export async function POST(request: Request) {\n");
        code.push_str("  try {\n");
        code.push_str(
            "    const { messages }: { messages: Array<Message> } = await request.json();\n\n",
        );

        // Tools imply an authenticated session, so guard the handler.
        if !tools.is_empty() {
            code.push_str("    const session = await auth();\n\n");
            code.push_str("    if (!session || !session.user) {\n");
            code.push_str("      return new Response('Unauthorized', { status: 401 });\n");
            code.push_str("    }\n\n");
        }

        match stream {
            Some(data) => self.emit_stream_response(code, data, tools),
            None => {
                code.push_str("    // Add a streamText implementation here\n");
                code.push_str("    return new Response('Not implemented', { status: 501 });\n");
            }
        }

        code.push_str("  } catch (error) {\n");
        code.push_str("    return NextResponse.json({ error }, { status: 400 });\n");
        code.push_str("  }\n");
        code.push_str("}\n");
    }

    fn emit_stream_response(&self, code: &mut String, data: &StreamTextData, tools: &[&ToolData]) {
        code.push_str("    return createDataStreamResponse({\n");
        code.push_str("      execute: (dataStream) => {\n");
        code.push_str("        const result = streamText({\n");

        let model_call = if data.model_format.is_empty() {
            DEFAULT_MODEL_CALL
        } else {
            &data.model_format
        };
        code.push_str(&format!("          model: {},\n", model_call));

        // The prompt is substituted verbatim; embedded quotes are the user's
        // to fix in the emitted source.
        code.push_str(&format!("          system: '{}',\n", data.system_prompt));
        if data.messages {
            code.push_str("          messages,\n");
        }
        code.push_str(&format!("          maxSteps: {},\n", data.max_steps));

        if !tools.is_empty() {
            code.push_str("          tools: {\n");
            for tool in tools {
                code.push_str(&format!(
                    "            {}: {}({{ session, dataStream }}),\n",
                    tool.name, tool.name
                ));
            }
            code.push_str("          },\n");
        }

        code.push_str("          onFinish: async ({ response }) => {\n");
        code.push_str("            console.log('Stream finished', response.id);\n");
        code.push_str("          },\n");
        code.push_str("        });\n\n");
        code.push_str("        result.consumeStream();\n\n");
        code.push_str("        result.mergeIntoDataStream(dataStream, {\n");
        code.push_str("          sendReasoning: true,\n");
        code.push_str("        });\n");
        code.push_str("      },\n");
        code.push_str("      onError: (error) => {\n");
        code.push_str("        console.error('Error in stream:', error);\n");
        code.push_str("        return 'An error occurred while processing your request.';\n");
        code.push_str("      },\n");
        code.push_str("    });\n");
    }
}
