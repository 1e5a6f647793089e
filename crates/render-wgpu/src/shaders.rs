/// WGSL shader for the instanced cube field.
///
/// `params.x` is the ambient intensity, `params.y` the cube edge length;
/// `sun.xyz` points toward the sun, `sun.w` is its intensity.
pub const FIELD_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    group_model: mat4x4<f32>,
    sun: vec4<f32>,
    params: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) offset: vec3<f32>,
    @location(3) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let local = vertex.position * uniforms.params.y + instance.offset;
    let world_pos = uniforms.group_model * vec4<f32>(local, 1.0);
    let world_normal = (uniforms.group_model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_normal = normalize(world_normal);
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let sun_dir = normalize(uniforms.sun.xyz);
    let diffuse = max(dot(in.world_normal, sun_dir), 0.0) * uniforms.sun.w;
    let lighting = min(uniforms.params.x + diffuse, 1.0);
    return vec4<f32>(in.color * lighting, 1.0);
}
"#;
