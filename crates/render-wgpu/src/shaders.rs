/// WGSL shader for lit box instances.
///
/// Matte standard material: Lambertian diffuse `albedo / PI * radiance * n.l`
/// summed over the active directional lights. Colors are linear; the sRGB
/// surface encodes on write.
pub const MESH_SHADER: &str = r#"
const PI: f32 = 3.141592653589793;
const MAX_LIGHTS: u32 = 4u;

struct Light {
    // xyz: direction the light travels
    direction: vec4<f32>,
    // rgb: linear color * intensity
    radiance: vec4<f32>,
};

struct Uniforms {
    view_proj: mat4x4<f32>,
    // x: number of active lights
    light_count: vec4<u32>,
    lights: array<Light, MAX_LIGHTS>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_normal = world_normal;
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let count = min(uniforms.light_count.x, MAX_LIGHTS);
    var rgb = vec3<f32>(0.0);
    for (var i = 0u; i < count; i = i + 1u) {
        let light = uniforms.lights[i];
        let l = -normalize(light.direction.xyz);
        rgb += in.color.rgb / PI * light.radiance.rgb * max(dot(n, l), 0.0);
    }
    return vec4<f32>(rgb, in.color.a);
}
"#;
